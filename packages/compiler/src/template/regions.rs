//! Region Emitters
//!
//! Conditional and repeated regions detach their single child at creation and
//! materialize clones of it at runtime. Code for the region's children is
//! captured into private buffers that get spliced into the watcher callback,
//! so the children are created, mounted and torn down once per clone.

use super::context::Context;
use super::emitters::Emitter;
use super::runtime;
use crate::error::{EmitError, Result};
use crate::ml_parser::Element;
use crate::output::CodeBuffer;

fn require_single_child(field: &str, element: &Element) -> Result<()> {
    let found = element.child_elements().count();
    if found != 1 {
        return Err(EmitError::RegionChildCount {
            field: field.to_string(),
            found,
        });
    }
    Ok(())
}

/// Collapses an expression onto one line so it can sit in a `//` comment.
fn one_line(expression: &str) -> String {
    expression.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shows or hides one clone of the region's child as its condition flips.
pub struct ConditionalEmitter<'a> {
    field: &'a str,
    condition: &'a str,
    stopper: &'a str,
    children_created: CodeBuffer,
    children_mounted: CodeBuffer,
    children_unmounted: CodeBuffer,
}

impl<'a> ConditionalEmitter<'a> {
    pub fn new(
        field: &'a str,
        condition: &'a str,
        stopper: &'a str,
        element: &Element,
    ) -> Result<Self> {
        require_single_child(field, element)?;
        Ok(ConditionalEmitter {
            field,
            condition,
            stopper,
            children_created: CodeBuffer::new(),
            children_mounted: CodeBuffer::new(),
            children_unmounted: CodeBuffer::new(),
        })
    }

    fn child(&self) -> String {
        format!("{}_child", self.field)
    }

    fn append_detach_child(&self, buffer: &CodeBuffer) {
        let child = self.child();
        buffer
            .append_buffer(&self.children_unmounted)
            .append(&format!("{}.remove();", child))
            .append(&format!("{} = null;", child));
    }
}

impl Emitter for ConditionalEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        let f = self.field;
        context.declarations.append(&format!(
            "// Fields for conditional region `{condition}`.\n\
             {disposer} {stopper};\n\
             {element} {f}_childTemplate;\n\
             {element} {f}_parent;\n\
             {element} {f}_child;\n\
             String {f}_childId;",
            condition = one_line(self.condition),
            disposer = runtime::type_name("WatcherDisposer"),
            stopper = self.stopper,
            element = runtime::type_name("Element"),
            f = f,
        ));
    }

    fn emit_created(&self, context: &Context) {
        let f = self.field;
        context.created.append(&format!(
            "assert({f}.elements.length == 1);\n\
             {f}_childTemplate = {f}.elements[0];\n\
             {f}_childId = {f}_childTemplate.id;\n\
             if ({f}_childId != null && {f}_childId != '') {f}_childTemplate.id = '';\n\
             {f}.style.display = 'none';\n\
             {f}.nodes.clear();",
            f = f,
        ));
    }

    fn emit_mounted(&self, context: &Context) {
        let f = self.field;
        let mounted = &context.mounted;
        mounted.append(&format!("{f}_parent = {f}.parent;", f = f));
        runtime::append_watch(mounted, self.stopper, self.condition)
            .append("bool showNow = e.newValue == true;")
            .append(&format!("if ({f}_child != null && !showNow) {{", f = f));
        self.append_detach_child(mounted);
        mounted
            .append(&format!(
                "}} else if ({f}_child == null && showNow) {{\n\
                 {f}_child = {f}_childTemplate.clone(true);\n\
                 if ({f}_childId != null && {f}_childId != '') {{\n\
                 {f}_child.id = {f}_childId;\n\
                 }}",
                f = f,
            ))
            .append_buffer(&self.children_created)
            .append_buffer(&self.children_mounted)
            .append(&format!(
                "{f}_parent.insertBefore({f}_child, {f}.nextNode);",
                f = f
            ))
            .append("}")
            .append("});");
    }

    fn emit_unmounted(&self, context: &Context) {
        let unmounted = &context.unmounted;
        unmounted
            .append(&format!("{}();", self.stopper))
            .append(&format!("if ({} != null) {{", self.child()));
        self.append_detach_child(unmounted);
        unmounted.append("}");
    }

    fn context_for_children(&self, context: &Context) -> Context {
        context.with_buffers(
            &context.declarations,
            &self.children_created,
            &self.children_mounted,
            &self.children_unmounted,
            Some(self.child()),
        )
    }
}

/// Rebuilds one clone of the region's child per item whenever the watched
/// collection changes.
pub struct RepeatedEmitter<'a> {
    field: &'a str,
    loop_variable: &'a str,
    loop_items: &'a str,
    stopper: &'a str,
    /// Local holding the clone for the current item.
    item_root: String,
    children_declarations: CodeBuffer,
    children_created: CodeBuffer,
    children_mounted: CodeBuffer,
    children_unmounted: CodeBuffer,
}

impl<'a> RepeatedEmitter<'a> {
    pub fn new(
        field: &'a str,
        loop_variable: &'a str,
        loop_items: &'a str,
        stopper: &'a str,
        element: &Element,
        context: &Context,
    ) -> Result<Self> {
        require_single_child(field, element)?;
        Ok(RepeatedEmitter {
            field,
            loop_variable,
            loop_items,
            stopper,
            item_root: context.new_name("__x"),
            children_declarations: CodeBuffer::new(),
            children_created: CodeBuffer::new(),
            children_mounted: CodeBuffer::new(),
            children_unmounted: CodeBuffer::new(),
        })
    }

    fn append_remove_all(&self, buffer: &CodeBuffer) {
        buffer
            .append(&format!("for (var remover in {}_removeChild) {{", self.field))
            .append("remover();")
            .append("}")
            .append(&format!("{}_removeChild.clear();", self.field));
    }
}

impl Emitter for RepeatedEmitter<'_> {
    fn emit_declarations(&self, context: &Context) {
        let f = self.field;
        context.declarations.append(&format!(
            "// Fields for repeated region `{variable} in {items}`.\n\
             {disposer} {stopper};\n\
             {element} {f}_childTemplate;\n\
             List<Function> {f}_removeChild = [];",
            variable = one_line(self.loop_variable),
            items = one_line(self.loop_items),
            disposer = runtime::type_name("WatcherDisposer"),
            stopper = self.stopper,
            element = runtime::type_name("Element"),
            f = f,
        ));
    }

    fn emit_created(&self, context: &Context) {
        let f = self.field;
        context.created.append(&format!(
            "assert({f}.elements.length == 1);\n\
             {f}_childTemplate = {f}.elements[0];\n\
             {f}.nodes.clear();",
            f = f,
        ));
    }

    fn emit_mounted(&self, context: &Context) {
        let f = self.field;
        let x = &self.item_root;
        let mounted = &context.mounted;
        runtime::append_watch(mounted, self.stopper, self.loop_items);
        self.append_remove_all(mounted);
        mounted
            .append("if (e.newValue is Iterable) {")
            .append(&format!("for (var {} in e.newValue) {{", one_line(self.loop_variable)))
            .append(&format!("var {x} = {f}_childTemplate.clone(true);", x = x, f = f))
            .append_buffer(&self.children_declarations)
            .append_buffer(&self.children_created)
            .append_buffer(&self.children_mounted)
            .append(&format!("{}.nodes.add({});", f, x))
            .append(&format!("{}_removeChild.add(() {{", f))
            .append_buffer(&self.children_unmounted)
            .append(&format!("{}.remove();", x))
            .append("});")
            .append("}")
            .append("}")
            .append("});");
    }

    fn emit_unmounted(&self, context: &Context) {
        context
            .unmounted
            .append(&format!("{}();", self.stopper));
        self.append_remove_all(&context.unmounted);
    }

    fn context_for_children(&self, context: &Context) -> Context {
        context.with_buffers(
            &self.children_declarations,
            &self.children_created,
            &self.children_mounted,
            &self.children_unmounted,
            Some(self.item_root.clone()),
        )
    }
}
