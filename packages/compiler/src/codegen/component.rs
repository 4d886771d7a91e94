//! Component Assembler
//!
//! Emits a component's template and splices the generated members into the
//! body of the component class the user wrote.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::preamble::{library_directive, split_library_directive, write_preamble};
use crate::config::EmitterConfig;
use crate::error::{Diagnostic, DiagnosticSink, Result};
use crate::info::ComponentRef;
use crate::ml_parser::{serialize_nodes, Element};
use crate::output::CodeBuffer;
use crate::template::runtime::{CREATED_HOOK, MOUNTED_HOOK, ROOT, UNMOUNTED_HOOK};
use crate::template::{emit_template, Context};
use crate::util::{escape_string, mask_comments_and_strings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUnit {
    pub file_name: String,
    /// Name of the component class in `user_code`.
    pub constructor: String,
    /// User-written source holding the component class.
    #[serde(default)]
    pub user_code: String,
    /// The component's `<template>` element.
    pub template: Element,
    /// Render into a shadow root instead of the host element.
    #[serde(default)]
    pub shadow_dom: bool,
    /// Inject the template markup as the root's initial content.
    #[serde(default)]
    pub inline_markup: bool,
    /// Components instantiated by the template, one import each.
    #[serde(default)]
    pub references: Vec<ComponentRef>,
}

impl ComponentUnit {
    pub fn new(file_name: &str, constructor: &str, user_code: &str, template: Element) -> Self {
        ComponentUnit {
            file_name: file_name.to_string(),
            constructor: constructor.to_string(),
            user_code: user_code.to_string(),
            template,
            shadow_dom: false,
            inline_markup: false,
            references: Vec::new(),
        }
    }
}

/// Generate the source of a component unit.
///
/// When the user code has no class declaration for the constructor, an error
/// diagnostic is reported and the user code is returned unchanged.
pub fn emit_component(
    unit: &ComponentUnit,
    config: &EmitterConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<String> {
    debug!(file = %unit.file_name, constructor = %unit.constructor, "emitting component");

    let context = Context::new();
    let root = if unit.shadow_dom {
        "createShadowRoot()"
    } else {
        "this"
    };
    context.created.append(&format!("var {} = {};", ROOT, root));
    if unit.inline_markup {
        let markup = serialize_nodes(&unit.template.children, config.preserve_whitespace);
        context
            .created
            .append(&format!("{}.innerHTML = {};", ROOT, escape_string(&markup)));
    }
    emit_template(&unit.template, &context)?;
    if unit.shadow_dom && !unit.inline_markup && !context.declarations.is_empty() {
        let diagnostic = Diagnostic::warning(format!(
            "{} renders into an empty shadow root; its template elements will not be found \
             unless the markup is inlined",
            unit.constructor
        ))
        .with_file(&unit.file_name);
        warn!(file = %unit.file_name, "{}", diagnostic.message);
        sink.report(diagnostic);
    }

    let (existing_library, user_code) = split_library_directive(&unit.user_code);
    let marker = class_marker(&unit.constructor)?;
    let masked = mask_comments_and_strings(&user_code);
    let Some(class_open) = marker.find(&masked) else {
        let diagnostic = Diagnostic::error(format!(
            "please provide a class definition for {ctor}:\n  class {ctor} extends WebComponent {{\n    ...\n  }}",
            ctor = unit.constructor
        ))
        .with_file(&unit.file_name);
        warn!(file = %unit.file_name, "{}", diagnostic.message);
        sink.report(diagnostic);
        return Ok(unit.user_code.clone());
    };

    let library = library_directive(existing_library, None, &unit.file_name);
    let mut out = write_preamble(config, &unit.file_name, &library, &unit.references);
    out.push_str(&user_code[..class_open.end()]);
    out.push('\n');
    out.push_str(&lifecycle_members(&context).render(1));
    out.push_str(&user_code[class_open.end()..]);

    debug!(
        file = %unit.file_name,
        fields = context.declarations.line_count(),
        "component emitted"
    );
    Ok(out)
}

/// Matches `class <constructor> ... {` up to and including the open brace.
/// Run it on masked code so declarations in comments and strings are skipped.
/// `$` counts as part of a name.
fn class_marker(constructor: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"(?:^|[^\w$.])class\s+{}(?:[^\w${{][^{{]*)?\{{",
        regex::escape(constructor)
    ))?)
}

fn lifecycle_members(context: &Context) -> CodeBuffer {
    let members = CodeBuffer::new();
    members
        .append("// Generated from the template.")
        .append_buffer(&context.declarations)
        .append(&format!("void {}() {{", CREATED_HOOK))
        .append_buffer(&context.created)
        .append("}")
        .append(&format!("void {}() {{", MOUNTED_HOOK))
        .append_buffer(&context.mounted)
        .append("}")
        .append(&format!("void {}() {{", UNMOUNTED_HOOK))
        .append_buffer(&context.unmounted)
        .append("}");
    members
}
