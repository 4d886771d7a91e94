//! ML Parser AST
//!
//! The annotated markup tree handed to the emitters. Elements keep their
//! static attributes in source order and may carry one metadata record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::info::ElementInfo;

/// Node type union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: &str) -> Self {
        Text {
            value: value.to_string(),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub name: String,
    #[serde(default)]
    pub attrs: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub info: Option<ElementInfo>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            info: None,
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, value: &str) -> Self {
        self.with_child(Text::new(value))
    }

    pub fn with_info(mut self, info: ElementInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// The id the element is looked up by: the metadata id wins over a static
    /// `id` attribute.
    pub fn element_id(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.element_id.as_deref())
            .or_else(|| self.attrs.get("id").map(String::as_str))
    }
}
