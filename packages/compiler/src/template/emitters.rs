//! Feature Emitters
//!
//! One emitter per template feature. Each binds to a single element and writes
//! into the lifecycle buffers of the context it is handed. The set is closed:
//! `FeatureEmitter::for_element` picks the applicable emitters from the shape
//! of the element's metadata, always in the same order, because later
//! emitters refer to the fields declared by earlier ones.

use indexmap::IndexMap;

use super::context::Context;
use super::regions::{ConditionalEmitter, RepeatedEmitter};
use super::runtime::{self, CREATED_HOOK, MOUNTED_HOOK, ROOT, UNMOUNTED_HOOK};
use crate::error::{EmitError, Result};
use crate::info::{AttributeInfo, ComponentRef, ContentBinding, EventListeners, RegionInfo};
use crate::ml_parser::{dom_type_for_tag, Element};
use crate::output::CodeBuffer;
use crate::util::{ends_in_line_comment, escape_string, is_legal_identifier};

/// The four lifecycle hooks every feature emitter exposes.
pub trait Emitter {
    fn emit_declarations(&self, _context: &Context) {}
    fn emit_created(&self, _context: &Context) {}
    fn emit_mounted(&self, _context: &Context) {}
    fn emit_unmounted(&self, _context: &Context) {}

    /// Context the element's children are emitted into.
    fn context_for_children(&self, context: &Context) -> Context {
        context.clone()
    }
}

pub enum FeatureEmitter<'a> {
    Field(FieldEmitter<'a>),
    Listener(ListenerEmitter<'a>),
    Binding(BindingEmitter<'a>),
    Instance(InstanceEmitter<'a>),
    Conditional(ConditionalEmitter<'a>),
    Repeated(RepeatedEmitter<'a>),
}

impl<'a> FeatureEmitter<'a> {
    /// Emitters for `element` in registration order: field, listeners,
    /// bindings, component instance, then at most one region.
    pub fn for_element(element: &'a Element, context: &Context) -> Result<Vec<FeatureEmitter<'a>>> {
        let Some(info) = element.info.as_ref() else {
            return Ok(Vec::new());
        };
        let mut emitters = Vec::new();

        let field = match info.identifier.as_deref() {
            Some(field) => {
                let element_id =
                    element
                        .element_id()
                        .ok_or_else(|| EmitError::MissingElementId {
                            field: field.to_string(),
                            tag: element.name.clone(),
                        })?;
                emitters.push(FeatureEmitter::Field(FieldEmitter::new(
                    field,
                    element_id,
                    &element.name,
                )));
                Some(field)
            }
            None => None,
        };
        let require_field = |feature: &'static str| {
            field.ok_or_else(|| EmitError::MissingField {
                tag: element.name.clone(),
                feature,
            })
        };

        if !info.events.is_empty() {
            emitters.push(FeatureEmitter::Listener(ListenerEmitter {
                field: require_field("event listeners")?,
                events: &info.events,
            }));
        }
        if !info.attributes.is_empty() || info.content_binding.is_some() {
            emitters.push(FeatureEmitter::Binding(BindingEmitter {
                field: require_field("data bindings")?,
                attributes: &info.attributes,
                content: info.content_binding.as_ref(),
            }));
        }
        if let Some(component) = &info.component {
            emitters.push(FeatureEmitter::Instance(InstanceEmitter {
                field: require_field("component instance")?,
                component,
            }));
        }
        match &info.region {
            Some(RegionInfo::Conditional { condition, stopper }) => {
                emitters.push(FeatureEmitter::Conditional(ConditionalEmitter::new(
                    require_field("conditional region")?,
                    condition,
                    stopper,
                    element,
                )?));
            }
            Some(RegionInfo::Repeated {
                loop_variable,
                loop_items,
                stopper,
            }) => {
                emitters.push(FeatureEmitter::Repeated(RepeatedEmitter::new(
                    require_field("repeated region")?,
                    loop_variable,
                    loop_items,
                    stopper,
                    element,
                    context,
                )?));
            }
            None => {}
        }
        Ok(emitters)
    }

    /// Whether this emitter scopes the element's children into a new context.
    pub fn is_region(&self) -> bool {
        matches!(
            self,
            FeatureEmitter::Conditional(_) | FeatureEmitter::Repeated(_)
        )
    }

    fn inner(&self) -> &dyn Emitter {
        match self {
            FeatureEmitter::Field(e) => e,
            FeatureEmitter::Listener(e) => e,
            FeatureEmitter::Binding(e) => e,
            FeatureEmitter::Instance(e) => e,
            FeatureEmitter::Conditional(e) => e,
            FeatureEmitter::Repeated(e) => e,
        }
    }
}

impl Emitter for FeatureEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        self.inner().emit_declarations(context)
    }

    fn emit_created(&self, context: &Context) {
        self.inner().emit_created(context)
    }

    fn emit_mounted(&self, context: &Context) {
        self.inner().emit_mounted(context)
    }

    fn emit_unmounted(&self, context: &Context) {
        self.inner().emit_unmounted(context)
    }

    fn context_for_children(&self, context: &Context) -> Context {
        self.inner().context_for_children(context)
    }
}

/// Declares the element's field and looks the element up on creation.
pub struct FieldEmitter<'a> {
    field: &'a str,
    element_id: &'a str,
    dom_type: &'static str,
}

impl<'a> FieldEmitter<'a> {
    pub fn new(field: &'a str, element_id: &'a str, tag: &str) -> Self {
        FieldEmitter {
            field,
            element_id,
            dom_type: dom_type_for_tag(tag),
        }
    }
}

impl Emitter for FieldEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        context.declarations.append(&format!(
            "{} {};",
            runtime::type_name(self.dom_type),
            self.field
        ));
    }

    fn emit_created(&self, context: &Context) {
        let selector = escape_string(&format!("#{}", self.element_id));
        let lookup = match context.query_root.as_deref() {
            None => format!("{} = {}.query({});", self.field, ROOT, selector),
            // A materialized clone may itself be the element we are after.
            Some(root) => format!(
                "{field} = {root}.id == {id} ? {root} : {root}.query({selector});",
                field = self.field,
                root = root,
                id = escape_string(self.element_id),
                selector = selector,
            ),
        };
        context.created.append(&lookup);
    }
}

/// Installs and removes event listeners on the element's field.
pub struct ListenerEmitter<'a> {
    field: &'a str,
    events: &'a IndexMap<String, EventListeners>,
}

impl Emitter for ListenerEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        for listener in self.events.values().flatten() {
            context.declarations.append(&format!(
                "{} {};",
                runtime::type_name("EventListener"),
                listener.listener_field
            ));
        }
    }

    fn emit_mounted(&self, context: &Context) {
        for (event, listeners) in self.events {
            for listener in listeners {
                context
                    .mounted
                    .append(&format!("{} = (e) {{", listener.listener_field));
                append_statement(&context.mounted, &listener.action)
                    .append(&runtime::dispatch())
                    .append("};")
                    .append(&format!(
                        "{}.on[{}].add({});",
                        self.field,
                        escape_string(event),
                        listener.listener_field
                    ));
            }
        }
    }

    fn emit_unmounted(&self, context: &Context) {
        for (event, listeners) in self.events {
            for listener in listeners {
                context
                    .unmounted
                    .append(&format!(
                        "{}.on[{}].remove({});",
                        self.field,
                        escape_string(event),
                        listener.listener_field
                    ))
                    .append(&format!("{} = null;", listener.listener_field));
            }
        }
    }
}

/// Watches bound attribute values, class tokens and text content.
pub struct BindingEmitter<'a> {
    field: &'a str,
    attributes: &'a IndexMap<String, AttributeInfo>,
    content: Option<&'a ContentBinding>,
}

impl BindingEmitter<'_> {
    fn stoppers(&self) -> Vec<&str> {
        self.attributes
            .values()
            .flat_map(AttributeInfo::stoppers)
            .chain(self.content.map(|content| content.stopper.as_str()))
            .collect()
    }
}

impl Emitter for BindingEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        for stopper in self.stoppers() {
            context.declarations.append(&format!(
                "{} {};",
                runtime::type_name("WatcherDisposer"),
                stopper
            ));
        }
    }

    fn emit_mounted(&self, context: &Context) {
        let field = self.field;
        for (name, attribute) in self.attributes {
            match attribute {
                AttributeInfo::Bound {
                    expression,
                    stopper,
                } => {
                    runtime::append_watch(&context.mounted, stopper, expression)
                        .append(&format!("{}.{} = e.newValue;", field, attribute_setter(name)))
                        .append("});");
                }
                AttributeInfo::Class { bindings } => {
                    for binding in bindings {
                        runtime::append_watch(&context.mounted, &binding.stopper, &binding.expression)
                            .append(&format!(
                                "if (e.oldValue != null && e.oldValue != '') {{\n\
                                 {field}.classes.remove(e.oldValue);\n\
                                 }}\n\
                                 if (e.newValue != null && e.newValue != '') {{\n\
                                 {field}.classes.add(e.newValue);\n\
                                 }}",
                                field = field
                            ))
                            .append("});");
                    }
                }
            }
        }
        if let Some(content) = self.content {
            runtime::append_watch(&context.mounted, &content.stopper, &content.expression)
                .append(&format!(
                    "{}.innerHTML = {}.htmlEscape('${{e.newValue}}');",
                    field,
                    runtime::PREFIX
                ))
                .append("});");
        }
    }

    fn emit_unmounted(&self, context: &Context) {
        for stopper in self.stoppers() {
            context.unmounted.append(&format!("{}();", stopper));
        }
    }
}

/// Member the bound value of attribute `name` is written to.
fn attribute_setter(name: &str) -> String {
    if let Some(key) = name.strip_prefix("data-") {
        format!("dataAttributes[{}]", escape_string(key))
    } else if name == "class" {
        "className".to_string()
    } else if is_legal_identifier(name) {
        name.to_string()
    } else {
        format!("attributes[{}]", escape_string(name))
    }
}

/// Appends user code as one statement, keeping its line structure. The `;`
/// goes on a line of its own when the code ends in a `//` comment.
fn append_statement<'b>(buffer: &'b CodeBuffer, code: &str) -> &'b CodeBuffer {
    let code = code.trim();
    if ends_in_line_comment(code) {
        buffer.append_verbatim(code).append(";")
    } else {
        buffer.append_verbatim(&format!("{};", code.trim_end_matches(';')))
    }
}

/// Instantiates a nested component on the element and forwards lifecycle
/// calls to it.
pub struct InstanceEmitter<'a> {
    field: &'a str,
    component: &'a ComponentRef,
}

impl Emitter for InstanceEmitter<'_> {
    fn emit_created(&self, context: &Context) {
        let field = self.field;
        context.created.append(&format!(
            "new {}.forElement({});",
            self.component.constructor, field
        ));
        for (name, value) in &self.component.values {
            append_statement(
                &context.created,
                &format!("{}.xtag.{} = {}", field, name, value.trim()),
            );
        }
        context
            .created
            .append(&format!("{}.xtag.{}();", field, CREATED_HOOK));
    }

    fn emit_mounted(&self, context: &Context) {
        context
            .mounted
            .append(&format!("{}.xtag.{}();", self.field, MOUNTED_HOOK));
    }

    fn emit_unmounted(&self, context: &Context) {
        context
            .unmounted
            .append(&format!("{}.xtag.{}();", self.field, UNMOUNTED_HOOK));
    }
}
