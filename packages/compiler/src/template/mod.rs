//! Template Emission Module
//!
//! Walks an annotated template and fills the four lifecycle buffers of an
//! emission context: declarations, created, mounted and unmounted.

pub mod context;
pub mod emitters;
pub mod regions;
pub mod runtime;
pub mod walker;

pub use context::Context;
pub use emitters::{Emitter, FeatureEmitter};
pub use walker::emit_template;
