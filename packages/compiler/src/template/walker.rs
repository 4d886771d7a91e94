//! Template Walker
//!
//! Depth-first, pre-order walk over the annotated tree. Every element with
//! metadata gets its feature emitters run against the current context; a
//! region element hands its children a scoped context of its own.

use tracing::{debug, trace};

use super::context::Context;
use super::emitters::{Emitter, FeatureEmitter};
use crate::error::Result;
use crate::ml_parser::{Element, Node};

/// Emit code for `root` and all of its descendants into `context`.
pub fn emit_template(root: &Element, context: &Context) -> Result<()> {
    visit_element(root, context)
}

fn visit_node(node: &Node, context: &Context) -> Result<()> {
    match node {
        Node::Element(element) => visit_element(element, context),
        Node::Text(_) => Ok(()),
    }
}

fn visit_element(element: &Element, context: &Context) -> Result<()> {
    if element.info.is_none() {
        return visit_children(element, context);
    }

    let emitters = FeatureEmitter::for_element(element, context)?;
    trace!(tag = %element.name, emitters = emitters.len(), "emitting element");
    for emitter in &emitters {
        emitter.emit_declarations(context);
        emitter.emit_created(context);
        emitter.emit_mounted(context);
        emitter.emit_unmounted(context);
    }

    match emitters.iter().find(|emitter| emitter.is_region()) {
        Some(region) => {
            let scoped = region.context_for_children(context);
            debug!(
                tag = %element.name,
                query_root = ?scoped.query_root,
                "descending into template region"
            );
            visit_children(element, &scoped)
        }
        None => visit_children(element, context),
    }
}

fn visit_children(element: &Element, context: &Context) -> Result<()> {
    for child in &element.children {
        visit_node(child, context)?;
    }
    Ok(())
}
