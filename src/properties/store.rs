use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::Chars;

use thiserror::Error;

/// Errors raised while loading a properties file.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The file is missing or unreadable.
    #[error("Failed to read properties file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid properties file.
    #[error("Malformed properties file at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// A single key/value pair borrowed from a [`PropertiesStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Key/value pairs parsed from a Java-style properties file.
///
/// Built once and never mutated. When a key appears more than once the last
/// occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct PropertiesStore {
    entries: HashMap<String, String>,
}

impl PropertiesStore {
    /// Reads and parses the properties file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropertiesError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|err| {
            let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
            PropertiesError::Parse {
                line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
                message: "file is not valid UTF-8".to_string(),
            }
        })?;

        Self::parse(&content)
    }

    /// Parses properties from already-read file content.
    ///
    /// Supports `key = value`, `key: value` and `key value` lines, `#`/`!`
    /// comments, backslash line continuations and the usual escapes
    /// (`\t`, `\n`, `\r`, `\f`, `\uXXXX`, `\<char>`).
    pub fn parse(content: &str) -> Result<Self, PropertiesError> {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let mut entries = HashMap::new();

        for (line, logical) in logical_lines(content) {
            let (raw_key, raw_value) = split_key_value(&logical);
            let parse_error = |message| PropertiesError::Parse { line, message };

            let key = unescape(raw_key).map_err(parse_error)?;
            let value = unescape(raw_value).map_err(parse_error)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every entry in [`sorted_keys`] order.
    pub fn sorted_entries(&self) -> Vec<PropertyEntry<'_>> {
        sorted_keys(self)
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| PropertyEntry { key, value }))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertiesStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Returns the keys of `store` in ascending byte order.
///
/// Output files are written in this order so they stay diff-stable across runs.
pub fn sorted_keys(store: &PropertiesStore) -> Vec<&str> {
    let mut keys: Vec<&str> = store.entries.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Joins continuation lines and drops blanks and comments.
///
/// Each logical line is paired with the 1-based number of its first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in content.lines().enumerate() {
        let trimmed = raw.trim_start_matches(is_whitespace);

        let (start, mut logical) = match pending.take() {
            Some(continued) => continued,
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if ends_with_odd_backslashes(trimmed) {
            logical.push_str(&trimmed[..trimmed.len() - 1]);
            pending = Some((start, logical));
        } else {
            logical.push_str(trimmed);
            lines.push((start, logical));
        }
    }

    // A continuation on the last line of the file ends the entry.
    if let Some(continued) = pending {
        lines.push(continued);
    }

    lines
}

/// Splits a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_whitespace(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start_matches(is_whitespace);
    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);

    (&line[..key_end], rest.trim_start_matches(is_whitespace))
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let mut units = vec![read_code_unit(&mut chars)?];

                if (0xD800..0xDC00).contains(&units[0]) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(format!("unpaired surrogate \\u{:04x}", units[0]));
                    }
                    units.push(read_code_unit(&mut chars)?);
                }

                for decoded in char::decode_utf16(units) {
                    let decoded = decoded.map_err(|err| {
                        format!("unpaired surrogate \\u{:04x}", err.unpaired_surrogate())
                    })?;
                    out.push(decoded);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut Chars<'_>) -> Result<u16, String> {
    let digits: String = chars.by_ref().take(4).collect();

    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        u16::from_str_radix(&digits, 16).map_err(|err| err.to_string())
    } else {
        Err(format!("malformed \\uxxxx encoding: \\u{digits}"))
    }
}
