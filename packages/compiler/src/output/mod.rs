//! Output Module
//!
//! Buffers that collect generated source before it is assembled into a unit.

pub mod code_buffer;

pub use code_buffer::CodeBuffer;
