//! Emitter configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::runtime;

/// An import every generated unit carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeImport {
    pub uri: String,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl RuntimeImport {
    pub fn new(uri: &str, prefix: Option<&str>) -> Self {
        RuntimeImport {
            uri: uri.to_string(),
            prefix: prefix.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmitterConfig {
    /// Emit the "Auto-generated ... DO NOT EDIT." banner.
    pub emit_header: bool,
    pub runtime_imports: Vec<RuntimeImport>,
    /// Keep whitespace-only text nodes in injected static markup.
    pub preserve_whitespace: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            emit_header: true,
            runtime_imports: vec![
                RuntimeImport::new("dart:html", Some(runtime::PREFIX)),
                RuntimeImport::new("package:web_components/watcher.dart", Some(runtime::PREFIX)),
            ],
            preserve_whitespace: false,
        }
    }
}

impl EmitterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
