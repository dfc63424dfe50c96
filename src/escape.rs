//! Backslash escaping for properties keys and values.
//!
//! One pure function produces the escaped form of a raw text fragment. The
//! escape set follows the Java properties conventions: line breaks and the
//! syntax-significant characters `=`, `:`, `#`, `!` and backslash always get
//! a backslash escape; keys additionally escape every space so a multi-word
//! key stays a single token, while values only escape a leading space (the
//! separator is ` = `, so later spaces are unambiguous).
//!
//! With `restrict_charset` set, every character outside printable ASCII is
//! written as a `\uXXXX` escape over its UTF-16 units, so astral characters
//! become surrogate pairs exactly as a JVM-produced properties file would
//! spell them.

use std::fmt::Write as _;

/// Escapes `text` for use as a properties key or value.
///
/// `escape_spaces` is set for key position (all spaces escaped) and unset for
/// value position (only a leading space is escaped). With `restrict_charset`,
/// characters outside `U+0020..=U+007E` become `\uXXXX` escapes; otherwise
/// they pass through unchanged.
///
/// The function is pure and performs no I/O.
///
/// # Examples
///
/// ```rust
/// use serde_props::escape::escape;
///
/// assert_eq!(escape("x y", true, false), "x\\ y");
/// assert_eq!(escape("hello world", false, false), "hello world");
/// assert_eq!(escape(" leading", false, false), "\\ leading");
/// assert_eq!(escape("a=b", false, false), "a\\=b");
/// assert_eq!(escape("héllo", false, true), "h\\u00E9llo");
/// ```
#[must_use]
pub fn escape(text: &str, escape_spaces: bool, restrict_charset: bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for (i, ch) in text.chars().enumerate() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            ' ' => {
                if i == 0 || escape_spaces {
                    out.push('\\');
                }
                out.push(' ');
            }
            _ if restrict_charset && !(' '..='~').contains(&ch) => {
                push_unicode_escape(&mut out, ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

// One \uXXXX escape per UTF-16 unit, uppercase hex, matching the spelling of
// JVM properties files.
fn push_unicode_escape(out: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        let _ = write!(out, "\\u{:04X}", unit);
    }
}
