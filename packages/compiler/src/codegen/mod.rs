//! Codegen Module
//!
//! Assembles generated units. A unit is either a single component, spliced
//! into the class the user wrote, or a whole page.

pub mod component;
pub mod document;
pub mod preamble;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EmitterConfig;
use crate::error::{Diagnostic, Result};

pub use component::{emit_component, ComponentUnit};
pub use document::{emit_document, strip_component_definitions, DocumentUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Unit {
    Component(ComponentUnit),
    Document(DocumentUnit),
}

impl Unit {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn file_name(&self) -> &str {
        match self {
            Unit::Component(unit) => &unit.file_name,
            Unit::Document(unit) => &unit.file_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitOutput {
    pub file_name: String,
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl EmitOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Generate one unit, collecting its diagnostics.
pub fn emit_unit(unit: &Unit, config: &EmitterConfig) -> Result<EmitOutput> {
    let mut diagnostics = Vec::new();
    let code = match unit {
        Unit::Component(component) => emit_component(component, config, &mut diagnostics)?,
        Unit::Document(document) => emit_document(document, config)?,
    };
    Ok(EmitOutput {
        file_name: unit.file_name().to_string(),
        code,
        diagnostics,
    })
}

/// Generate many units in parallel. Each unit is emitted on one thread with
/// its own contexts; results keep the order of `units`.
pub fn compile_units(units: &[Unit], config: &EmitterConfig) -> Vec<Result<EmitOutput>> {
    debug!(units = units.len(), "compiling units");
    units.par_iter().map(|unit| emit_unit(unit, config)).collect()
}
