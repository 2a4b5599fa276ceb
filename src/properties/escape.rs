//! Escaping for properties-file output.
//!
//! `PropertyResourceBundle` reads `.properties` files as ISO-8859-1 and decodes
//! `\uXXXX` escapes, so anything outside printable ASCII is written as an
//! escape sequence.

use std::fmt::Write;

/// Escapes a value for the right-hand side of a properties line.
///
/// Printable ASCII passes through unchanged, except a backslash, which is
/// doubled, and a leading space, which is written as `\ ` so the reader does
/// not strip it. Every other character becomes `\uXXXX` with lowercase hex
/// digits; characters above U+FFFF become a UTF-16 surrogate pair. Tab,
/// newline, carriage return and form feed use their short escapes so a value
/// always stays on one line.
///
/// ```
/// use props_translate::properties::escape;
///
/// assert_eq!(escape("El gato saltó"), "El gato salt\\u00f3");
/// assert_eq!(escape(r"C:\"), r"C:\\");
/// ```
pub fn escape(text: &str) -> String {
    escape_with(text, |index, c| c == '\\' || (index == 0 && c == ' '))
}

/// Escapes a key for the left-hand side of a properties line.
///
/// Same as [`escape`], plus a backslash in front of separators, comment
/// markers and backslashes, so the key reads back identically.
pub fn escape_key(key: &str) -> String {
    escape_with(key, |_, c| matches!(c, ' ' | '=' | ':' | '#' | '!' | '\\'))
}

fn escape_with(text: &str, needs_backslash: impl Fn(usize, char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, c) in text.chars().enumerate() {
        match c {
            c if needs_backslash(index, c) => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' '..='~' => escaped.push(c),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{000C}' => escaped.push_str("\\f"),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // fmt::Write for String is infallible
                    let _ = write!(escaped, "\\u{unit:04x}");
                }
            }
        }
    }

    escaped
}
