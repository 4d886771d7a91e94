//! Names from the component runtime that generated code calls into.

use crate::output::CodeBuffer;
use crate::util::ends_in_line_comment;

/// Import prefix of the runtime libraries.
pub const PREFIX: &str = "autogenerated";

/// Local holding the unit's synthesized root, the default query root.
pub const ROOT: &str = "_root";

pub const CREATED_HOOK: &str = "created_autogenerated";
pub const MOUNTED_HOOK: &str = "inserted_autogenerated";
pub const UNMOUNTED_HOOK: &str = "removed_autogenerated";

/// Opens a watcher callback on `buffer`; the caller appends the body and
/// closes it with `});`. The expression is copied without reformatting, and a
/// trailing `//` comment in it pushes the callback onto the next line.
pub fn append_watch<'b>(buffer: &'b CodeBuffer, stopper: &str, expression: &str) -> &'b CodeBuffer {
    let opener = format!("{} = {}.watchAndInvoke(() => {}", stopper, PREFIX, expression.trim());
    if ends_in_line_comment(&opener) {
        buffer.append_verbatim(&opener).append(", (e) {")
    } else {
        buffer.append_verbatim(&format!("{}, (e) {{", opener))
    }
}

/// Statement that runs the change-detection pass.
pub fn dispatch() -> String {
    format!("{}.dispatch();", PREFIX)
}

/// Fully qualified runtime type name.
pub fn type_name(name: &str) -> String {
    format!("{}.{}", PREFIX, name)
}
