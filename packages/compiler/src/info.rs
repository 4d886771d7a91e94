//! Template Metadata
//!
//! Per-element facts produced by the analysis phase. The emitters only read
//! these records; expressions are opaque text that ends up verbatim in the
//! generated code.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Listeners registered for one event name. Almost always a single entry.
pub type EventListeners = SmallVec<[EventInfo; 1]>;

/// Everything the analysis phase attached to one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementInfo {
    /// Generated field holding the element at runtime, e.g. `__e0`.
    pub identifier: Option<String>,
    /// Stable element id used to look the element up after creation.
    pub element_id: Option<String>,
    pub events: IndexMap<String, EventListeners>,
    pub attributes: IndexMap<String, AttributeInfo>,
    pub content_binding: Option<ContentBinding>,
    /// Nested component instantiated on this element.
    pub component: Option<ComponentRef>,
    /// Set when the element is a conditional or repeated region.
    pub region: Option<RegionInfo>,
}

impl ElementInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, identifier: &str, element_id: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self.element_id = Some(element_id.to_string());
        self
    }

    pub fn with_event(mut self, event: &str, action: &str, listener_field: &str) -> Self {
        self.events
            .entry(event.to_string())
            .or_default()
            .push(EventInfo {
                action: action.to_string(),
                listener_field: listener_field.to_string(),
            });
        self
    }

    pub fn with_attribute(mut self, name: &str, attribute: AttributeInfo) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn with_content_binding(mut self, expression: &str, stopper: &str) -> Self {
        self.content_binding = Some(ContentBinding {
            expression: expression.to_string(),
            stopper: stopper.to_string(),
        });
        self
    }

    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_region(mut self, region: RegionInfo) -> Self {
        self.region = Some(region);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    /// Handler statement run when the event fires.
    pub action: String,
    /// Field that keeps the listener so it can be removed again.
    pub listener_field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AttributeInfo {
    /// A single bound expression, e.g. `value="{{name}}"`.
    #[serde(rename_all = "camelCase")]
    Bound { expression: String, stopper: String },
    /// `class="{{a}} {{b}}"`: each expression toggles its own class token.
    #[serde(rename_all = "camelCase")]
    Class { bindings: Vec<ClassBinding> },
}

impl AttributeInfo {
    pub fn bound(expression: &str, stopper: &str) -> Self {
        AttributeInfo::Bound {
            expression: expression.to_string(),
            stopper: stopper.to_string(),
        }
    }

    pub fn class(bindings: &[(&str, &str)]) -> Self {
        AttributeInfo::Class {
            bindings: bindings
                .iter()
                .map(|(expression, stopper)| ClassBinding {
                    expression: expression.to_string(),
                    stopper: stopper.to_string(),
                })
                .collect(),
        }
    }

    /// Disposer fields declared for this attribute.
    pub fn stoppers(&self) -> Vec<&str> {
        match self {
            AttributeInfo::Bound { stopper, .. } => vec![stopper.as_str()],
            AttributeInfo::Class { bindings } => {
                bindings.iter().map(|b| b.stopper.as_str()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBinding {
    pub expression: String,
    pub stopper: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBinding {
    pub expression: String,
    pub stopper: String,
}

/// A component used by the template: the constructor to call, the file that
/// defines it, and initial values assigned right after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    pub constructor: String,
    pub file: String,
    #[serde(default)]
    pub values: IndexMap<String, String>,
}

impl ComponentRef {
    pub fn new(constructor: &str, file: &str) -> Self {
        ComponentRef {
            constructor: constructor.to_string(),
            file: file.to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RegionInfo {
    /// `<template instantiate="if cond">`
    #[serde(rename_all = "camelCase")]
    Conditional { condition: String, stopper: String },
    /// `<template iterate="item in items">`
    #[serde(rename_all = "camelCase")]
    Repeated {
        loop_variable: String,
        loop_items: String,
        stopper: String,
    },
}

impl RegionInfo {
    pub fn conditional(condition: &str, stopper: &str) -> Self {
        RegionInfo::Conditional {
            condition: condition.to_string(),
            stopper: stopper.to_string(),
        }
    }

    pub fn repeated(loop_variable: &str, loop_items: &str, stopper: &str) -> Self {
        RegionInfo::Repeated {
            loop_variable: loop_variable.to_string(),
            loop_items: loop_items.to_string(),
            stopper: stopper.to_string(),
        }
    }
}
