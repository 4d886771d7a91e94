//! Unit Preamble
//!
//! Header banner, library directive and imports shared by both assemblers.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EmitterConfig;
use crate::info::ComponentRef;
use crate::util::{escape_string, library_name_for_file, mask_comments_and_strings};

static LIBRARY_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*library[ \t]+[A-Za-z_][\w.]*[ \t]*;[^\n]*\n?").unwrap());

/// Pull the `library` directive out of user code.
///
/// Only a directive preceded by nothing but whitespace and comments counts.
/// Returns the directive (trimmed) and the code with the directive removed.
/// Imports are generated ahead of user code, and the directive has to stay in
/// front of them.
pub fn split_library_directive(code: &str) -> (Option<String>, String) {
    let masked = mask_comments_and_strings(code);
    match LIBRARY_DIRECTIVE.find(&masked) {
        Some(m) if masked[..m.start()].trim().is_empty() => {
            let rest = format!("{}{}", &code[..m.start()], &code[m.end()..]);
            (Some(code[m.start()..m.end()].trim().to_string()), rest)
        }
        _ => (None, code.to_string()),
    }
}

/// The directive to emit: the one from user code if present, else one named
/// after `library_name` or, failing that, the file.
pub fn library_directive(
    existing: Option<String>,
    library_name: Option<&str>,
    file_name: &str,
) -> String {
    existing.unwrap_or_else(|| {
        let name = library_name
            .map(str::to_string)
            .unwrap_or_else(|| library_name_for_file(file_name));
        format!("library {};", name)
    })
}

/// Banner, library directive, runtime imports and one import per distinct
/// component file, in first-use order. Ends with a blank line.
pub fn write_preamble(
    config: &EmitterConfig,
    file_name: &str,
    library: &str,
    references: &[ComponentRef],
) -> String {
    let mut lines: Vec<String> = Vec::new();
    if config.emit_header {
        lines.push(format!("// Auto-generated from {}.", file_name));
        lines.push("// DO NOT EDIT.".to_string());
        lines.push(String::new());
    }
    lines.push(library.to_string());
    lines.push(String::new());
    for import in &config.runtime_imports {
        match &import.prefix {
            Some(prefix) => lines.push(format!("import {} as {};", escape_string(&import.uri), prefix)),
            None => lines.push(format!("import {};", escape_string(&import.uri))),
        }
    }
    let files: IndexSet<&str> = references.iter().map(|r| r.file.as_str()).collect();
    for file in files {
        lines.push(format!("import {};", escape_string(file)));
    }
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
