//! HTML Tag Definitions
//!
//! Void tags and the runtime DOM type used to declare an element field.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static VOID_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

static DOM_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("a", "AnchorElement");
    m.insert("area", "AreaElement");
    m.insert("audio", "AudioElement");
    m.insert("body", "BodyElement");
    m.insert("br", "BRElement");
    m.insert("button", "ButtonElement");
    m.insert("canvas", "CanvasElement");
    m.insert("div", "DivElement");
    m.insert("dl", "DListElement");
    m.insert("form", "FormElement");
    m.insert("h1", "HeadingElement");
    m.insert("h2", "HeadingElement");
    m.insert("h3", "HeadingElement");
    m.insert("h4", "HeadingElement");
    m.insert("h5", "HeadingElement");
    m.insert("h6", "HeadingElement");
    m.insert("hr", "HRElement");
    m.insert("iframe", "IFrameElement");
    m.insert("img", "ImageElement");
    m.insert("input", "InputElement");
    m.insert("label", "LabelElement");
    m.insert("li", "LIElement");
    m.insert("ol", "OListElement");
    m.insert("option", "OptionElement");
    m.insert("p", "ParagraphElement");
    m.insert("pre", "PreElement");
    m.insert("select", "SelectElement");
    m.insert("span", "SpanElement");
    m.insert("table", "TableElement");
    m.insert("td", "TableCellElement");
    m.insert("th", "TableCellElement");
    m.insert("textarea", "TextAreaElement");
    m.insert("tr", "TableRowElement");
    m.insert("ul", "UListElement");
    m.insert("video", "VideoElement");
    m
});

pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(name.to_ascii_lowercase().as_str())
}

/// Runtime type name for a field holding an element with this tag.
pub fn dom_type_for_tag(name: &str) -> &'static str {
    DOM_TYPES
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or("Element")
}
