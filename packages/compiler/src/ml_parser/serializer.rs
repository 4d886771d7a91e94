//! Markup Serializer
//!
//! Turns the template tree back into static markup, which becomes the initial
//! content of a generated unit.

use super::ast::{Element, Node, Text};
use super::html_tags::is_void_tag;

pub struct SerializerVisitor {
    preserve_whitespace: bool,
}

impl SerializerVisitor {
    pub fn new(preserve_whitespace: bool) -> Self {
        SerializerVisitor {
            preserve_whitespace,
        }
    }

    pub fn visit_element(&self, element: &Element) -> String {
        let attrs = self.visit_all_attributes(element);
        if is_void_tag(&element.name) {
            return format!("<{}{}>", element.name, attrs);
        }
        let children = self.visit_all(&element.children);
        format!("<{}{}>{}</{}>", element.name, attrs, children, element.name)
    }

    pub fn visit_attribute(&self, name: &str, value: &str) -> String {
        format!("{}=\"{}\"", name, escape_attribute_value(value))
    }

    pub fn visit_text(&self, text: &Text) -> String {
        if !self.preserve_whitespace && text.is_whitespace() {
            return String::new();
        }
        text.value.clone()
    }

    pub fn visit_all(&self, nodes: &[Node]) -> String {
        nodes
            .iter()
            .map(|node| match node {
                Node::Element(e) => self.visit_element(e),
                Node::Text(t) => self.visit_text(t),
            })
            .collect()
    }

    fn visit_all_attributes(&self, element: &Element) -> String {
        let mut out = String::new();
        let metadata_id = element
            .info
            .as_ref()
            .and_then(|info| info.element_id.as_deref());
        for (name, value) in &element.attrs {
            let value = match metadata_id {
                Some(id) if name == "id" => id,
                _ => value.as_str(),
            };
            out.push(' ');
            out.push_str(&self.visit_attribute(name, value));
        }
        if let Some(id) = metadata_id {
            if !element.attrs.contains_key("id") {
                out.push(' ');
                out.push_str(&self.visit_attribute("id", id));
            }
        }
        out
    }
}

/// Serialize `nodes` to a single markup string.
pub fn serialize_nodes(nodes: &[Node], preserve_whitespace: bool) -> String {
    SerializerVisitor::new(preserve_whitespace).visit_all(nodes)
}

fn escape_attribute_value(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
