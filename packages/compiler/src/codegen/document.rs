//! Document Assembler
//!
//! Emits a whole page as a top-level program: the body markup is injected
//! at init time and the template's bindings are set up right after it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::preamble::{library_directive, split_library_directive, write_preamble};
use crate::config::EmitterConfig;
use crate::error::Result;
use crate::info::ComponentRef;
use crate::ml_parser::{serialize_nodes, Element, Node};
use crate::output::CodeBuffer;
use crate::template::runtime::{PREFIX, ROOT};
use crate::template::{emit_template, Context};
use crate::util::escape_string;

/// Tag wrapping a component definition inside a page. Those are compiled as
/// component units, not as part of the page.
pub const COMPONENT_DEFINITION_TAG: &str = "element";

pub const INIT_FUNCTION: &str = "init_autogenerated";
pub const DISPOSE_FUNCTION: &str = "dispose_autogenerated";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUnit {
    pub file_name: String,
    #[serde(default)]
    pub library_name: Option<String>,
    /// Top-level user code of the page.
    #[serde(default)]
    pub user_code: String,
    /// The page's `<body>` element.
    pub body: Element,
    #[serde(default)]
    pub references: Vec<ComponentRef>,
}

impl DocumentUnit {
    pub fn new(file_name: &str, user_code: &str, body: Element) -> Self {
        DocumentUnit {
            file_name: file_name.to_string(),
            library_name: None,
            user_code: user_code.to_string(),
            body,
            references: Vec::new(),
        }
    }
}

/// Copy of `element` without component definitions anywhere below it.
pub fn strip_component_definitions(element: &Element) -> Element {
    let children = element
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Element(e) if e.name.eq_ignore_ascii_case(COMPONENT_DEFINITION_TAG) => None,
            Node::Element(e) => Some(Node::Element(strip_component_definitions(e))),
            Node::Text(t) => Some(Node::Text(t.clone())),
        })
        .collect();
    Element {
        name: element.name.clone(),
        attrs: element.attrs.clone(),
        children,
        info: element.info.clone(),
    }
}

/// Generate the source of a page.
pub fn emit_document(unit: &DocumentUnit, config: &EmitterConfig) -> Result<String> {
    debug!(file = %unit.file_name, "emitting document");

    let body = strip_component_definitions(&unit.body);
    let markup = serialize_nodes(&body.children, config.preserve_whitespace);

    let context = Context::new();
    context
        .created
        .append(&format!("var {} = {}.document.body;", ROOT, PREFIX))
        .append(&format!("{}.innerHTML = {};", ROOT, escape_string(&markup)));
    emit_template(&body, &context)?;

    let (existing_library, user_code) = split_library_directive(&unit.user_code);
    let library = library_directive(
        existing_library,
        unit.library_name.as_deref(),
        &unit.file_name,
    );
    let mut out = write_preamble(config, &unit.file_name, &library, &unit.references);
    let user_code = user_code.trim();
    if !user_code.is_empty() {
        out.push_str(user_code);
        out.push_str("\n\n");
    }
    out.push_str(&program(&context).render(0));
    Ok(out)
}

fn program(context: &Context) -> CodeBuffer {
    let program = CodeBuffer::new();
    program
        .append("// Generated from the page template.")
        .append_buffer(&context.declarations)
        .append(&format!("void {}() {{", INIT_FUNCTION))
        .append_buffer(&context.created)
        .append_buffer(&context.mounted)
        .append("}")
        .append(&format!("void {}() {{", DISPOSE_FUNCTION))
        .append_buffer(&context.unmounted)
        .append("}");
    program
}
