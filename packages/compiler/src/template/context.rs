//! Emission Context
//!
//! The four buffers feature emitters write into, the element id lookups are
//! resolved from, and the counter used to mint unique local names.

use std::cell::Cell;
use std::rc::Rc;

use crate::output::CodeBuffer;

#[derive(Debug, Clone)]
pub struct Context {
    pub declarations: CodeBuffer,
    pub created: CodeBuffer,
    pub mounted: CodeBuffer,
    pub unmounted: CodeBuffer,
    /// Variable holding the element lookups start from. `None` is the unit's
    /// synthesized root.
    pub query_root: Option<String>,
    next_id: Rc<Cell<usize>>,
}

impl Context {
    pub fn new() -> Self {
        Context {
            declarations: CodeBuffer::new(),
            created: CodeBuffer::new(),
            mounted: CodeBuffer::new(),
            unmounted: CodeBuffer::new(),
            query_root: None,
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// A view writing into the given buffers. The id counter stays shared
    /// with `self`, so names minted through either context never collide.
    pub fn with_buffers(
        &self,
        declarations: &CodeBuffer,
        created: &CodeBuffer,
        mounted: &CodeBuffer,
        unmounted: &CodeBuffer,
        query_root: Option<String>,
    ) -> Context {
        Context {
            declarations: declarations.clone(),
            created: created.clone(),
            mounted: mounted.clone(),
            unmounted: unmounted.clone(),
            query_root,
            next_id: Rc::clone(&self.next_id),
        }
    }

    pub fn next_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    pub fn new_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_id())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
