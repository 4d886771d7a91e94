#![deny(clippy::all)]

//! Template Emitter
//!
//! Turns annotated template trees into generated component and page code.
//! An analysis phase attaches `ElementInfo` metadata to elements; this crate
//! walks the tree, lets one emitter per element feature contribute code to
//! the declaration, creation, mount and unmount sections, and assembles the
//! sections into the final unit.

pub mod codegen;
pub mod config;
pub mod error;
pub mod info;
pub mod ml_parser;
pub mod output;
pub mod template;
pub mod util;

pub use codegen::{compile_units, emit_unit, ComponentUnit, DocumentUnit, EmitOutput, Unit};
pub use config::{EmitterConfig, RuntimeImport};
pub use error::{Diagnostic, DiagnosticSink, EmitError, Result, Severity, TracingSink};
pub use info::{
    AttributeInfo, ClassBinding, ComponentRef, ContentBinding, ElementInfo, EventInfo, RegionInfo,
};
pub use ml_parser::{Element, Node, Text};
pub use output::CodeBuffer;
pub use template::{emit_template, Context};
