//! ML (Markup Language) Module
//!
//! The annotated markup tree and its serialization back to static markup.

pub mod ast;
pub mod html_tags;
pub mod serializer;

pub use ast::*;
pub use html_tags::{dom_type_for_tag, is_void_tag};
pub use serializer::serialize_nodes;
