//! Utility Functions
//!
//! Quoting and naming helpers shared by the emitters and assemblers.

use once_cell::sync::Lazy;
use regex::Regex;

static LEGAL_IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_$][0-9a-zA-Z_$]*$").unwrap());

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z_]+").unwrap());

/// Whether `input` can be used as a member name without quoting.
pub fn is_legal_identifier(input: &str) -> bool {
    LEGAL_IDENTIFIER_RE.is_match(input)
}

/// Quote `input` as a single-quoted string literal of the target language.
/// `$` is escaped so the literal never interpolates.
pub fn escape_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 2);
    escaped.push('\'');
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '$' => escaped.push_str("\\$"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('\'');
    escaped
}

/// Copy of `code` with comments and the contents of string literals replaced
/// by spaces. Quote delimiters, line breaks and byte offsets are kept, so a
/// match found in the masked text indexes into `code`.
pub fn mask_comments_and_strings(code: &str) -> String {
    String::from_utf8_lossy(&mask(code, b' ')).into_owned()
}

/// Whether the last line of `code` ends inside a `//` comment, so text
/// appended on the same line would be commented out.
pub fn ends_in_line_comment(code: &str) -> bool {
    let masked = mask(code, LINE_COMMENT_FILL);
    masked
        .rsplit(|b| *b == b'\n')
        .next()
        .is_some_and(|last_line| last_line.contains(&LINE_COMMENT_FILL))
}

const LINE_COMMENT_FILL: u8 = 0x01;

fn mask(code: &str, line_comment_fill: u8) -> Vec<u8> {
    let bytes = code.as_bytes();
    let mut out = bytes.to_vec();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = code[i..].find('\n').map_or(bytes.len(), |n| i + n);
                fill(&mut out[i..end], line_comment_fill);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = code[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |n| i + 2 + n + 2);
                fill(&mut out[i..end], b' ');
                i = end;
            }
            quote @ (b'\'' | b'"') => {
                let triple = bytes.get(i + 1) == Some(&quote) && bytes.get(i + 2) == Some(&quote);
                let start = if triple { i + 3 } else { i + 1 };
                let closes_at = |j: usize| {
                    bytes[j] == quote
                        && (!triple
                            || (bytes.get(j + 1) == Some(&quote) && bytes.get(j + 2) == Some(&quote)))
                };
                let mut j = start;
                while j < bytes.len() && !closes_at(j) && (triple || bytes[j] != b'\n') {
                    j += if bytes[j] == b'\\' { 2 } else { 1 };
                }
                let end = j.min(bytes.len());
                fill(&mut out[start.min(end)..end], b' ');
                i = if end == bytes.len() || bytes[end] == b'\n' {
                    end
                } else if triple {
                    end + 3
                } else {
                    end + 1
                };
            }
            _ => i += 1,
        }
    }
    out
}

/// Overwrites every byte except line breaks.
fn fill(bytes: &mut [u8], with: u8) {
    for b in bytes.iter_mut().filter(|b| **b != b'\n') {
        *b = with;
    }
}

/// Derive a library name from a file name: `x-counter.html` -> `x_counter`.
pub fn library_name_for_file(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.split('.').next().unwrap_or(base);
    let name = NON_WORD_RE.replace_all(stem, "_").to_lowercase();
    match name.chars().next() {
        None => "main".to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{}", name),
        Some(_) => name,
    }
}
