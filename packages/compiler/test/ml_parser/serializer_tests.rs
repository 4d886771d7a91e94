/**
 * Markup Serializer Tests
 *
 * Static markup injected as a unit's initial content.
 */

#[cfg(test)]
mod tests {
    use template_emitter::info::ElementInfo;
    use template_emitter::ml_parser::{serialize_nodes, Element, Node, Text};

    fn serialize(element: Element) -> String {
        serialize_nodes(&[Node::Element(element)], false)
    }

    #[test]
    fn should_support_element_and_attributes() {
        let element = Element::new("p").with_attr("k", "value").with_text("some text");
        assert_eq!(serialize(element), "<p k=\"value\">some text</p>");
    }

    #[test]
    fn should_write_void_tags_without_closing_tag() {
        let element = Element::new("div")
            .with_child(Element::new("input").with_attr("type", "text"))
            .with_child(Element::new("br"));
        assert_eq!(serialize(element), "<div><input type=\"text\"><br></div>");
    }

    #[test]
    fn should_escape_attribute_values() {
        let element = Element::new("a").with_attr("title", "Tom & \"Jerry\"");
        assert_eq!(
            serialize(element),
            "<a title=\"Tom &amp; &quot;Jerry&quot;\"></a>"
        );
    }

    #[test]
    fn should_use_metadata_element_id() {
        let replaced = Element::new("span")
            .with_attr("id", "static")
            .with_attr("class", "x")
            .with_info(ElementInfo::new().with_field("__e0", "__e-0"));
        assert_eq!(serialize(replaced), "<span id=\"__e-0\" class=\"x\"></span>");

        let added = Element::new("span")
            .with_attr("class", "x")
            .with_info(ElementInfo::new().with_field("__e0", "__e-0"));
        assert_eq!(serialize(added), "<span class=\"x\" id=\"__e-0\"></span>");
    }

    #[test]
    fn should_drop_whitespace_only_text_unless_preserved() {
        let nodes = vec![
            Node::Text(Text::new("\n  ")),
            Node::Element(Element::new("b").with_text(" x ")),
            Node::Text(Text::new("\n")),
        ];
        assert_eq!(serialize_nodes(&nodes, false), "<b> x </b>");
        assert_eq!(serialize_nodes(&nodes, true), "\n  <b> x </b>\n");
    }
}
