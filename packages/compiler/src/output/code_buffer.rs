//! Code Buffer
//!
//! An ordered list of generated lines that can splice other buffers in by
//! reference. Spliced buffers stay live: text appended to them after the
//! splice still shows up when the outer buffer is rendered.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::util::mask_comments_and_strings;

const INDENT_WITH: &str = "  ";

#[derive(Debug, Clone)]
enum Segment {
    Line(String),
    Nested(CodeBuffer),
}

/// Shared handle to a list of generated lines.
///
/// Cloning a `CodeBuffer` clones the handle, not the content. Indentation is
/// not stored; it is recomputed from brace nesting every time the buffer is
/// rendered, so callers append unindented text.
#[derive(Debug, Clone, Default)]
pub struct CodeBuffer {
    segments: Rc<RefCell<Vec<Segment>>>,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text. Multi-line text is split into lines, each line is
    /// trimmed and blank lines are dropped.
    pub fn append(&self, text: &str) -> &Self {
        let mut segments = self.segments.borrow_mut();
        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() {
                segments.push(Segment::Line(line.to_string()));
            }
        }
        self
    }

    /// Append `text` as one segment, neither trimmed nor split. Only the
    /// first line is indented on render; continuation lines keep their own
    /// whitespace. Used for code that embeds user expressions.
    pub fn append_verbatim(&self, text: &str) -> &Self {
        if !text.is_empty() {
            self.segments
                .borrow_mut()
                .push(Segment::Line(text.to_string()));
        }
        self
    }

    /// Embed `other` at the current position.
    ///
    /// Buffers form a tree; embedding a buffer into itself (directly or through
    /// a chain of embeddings) would recurse forever when rendering.
    pub fn append_buffer(&self, other: &CodeBuffer) -> &Self {
        debug_assert!(!self.ptr_eq(other), "a code buffer cannot embed itself");
        self.segments
            .borrow_mut()
            .push(Segment::Nested(other.clone()));
        self
    }

    pub fn ptr_eq(&self, other: &CodeBuffer) -> bool {
        Rc::ptr_eq(&self.segments, &other.segments)
    }

    /// True when neither this buffer nor any buffer embedded in it holds a line.
    pub fn is_empty(&self) -> bool {
        self.segments.borrow().iter().all(|segment| match segment {
            Segment::Line(_) => false,
            Segment::Nested(buffer) => buffer.is_empty(),
        })
    }

    /// Number of literal lines, counting embedded buffers recursively.
    pub fn line_count(&self) -> usize {
        self.segments
            .borrow()
            .iter()
            .map(|segment| match segment {
                Segment::Line(text) => text.lines().count(),
                Segment::Nested(buffer) => buffer.line_count(),
            })
            .sum()
    }

    /// Flatten the buffer. Every line is prefixed with `indent` levels plus its
    /// own brace depth and terminated by a newline.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(indent, &mut out);
        out
    }

    fn render_into(&self, base: usize, out: &mut String) {
        let mut depth = 0usize;
        for segment in self.segments.borrow().iter() {
            match segment {
                Segment::Line(line) => {
                    let level = if line.starts_with('}') {
                        depth.saturating_sub(1)
                    } else {
                        depth
                    };
                    out.push_str(&create_indent(base + level));
                    out.push_str(line);
                    out.push('\n');
                    depth = (depth as isize + brace_delta(line)).max(0) as usize;
                }
                Segment::Nested(buffer) => buffer.render_into(base + depth, out),
            }
        }
    }
}

impl fmt::Display for CodeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

fn create_indent(count: usize) -> String {
    INDENT_WITH.repeat(count)
}

/// Net count of `{` minus `}` outside string literals and comments. `text`
/// may span several lines.
fn brace_delta(text: &str) -> isize {
    mask_comments_and_strings(text)
        .bytes()
        .map(|b| match b {
            b'{' => 1,
            b'}' => -1,
            _ => 0,
        })
        .sum()
}
