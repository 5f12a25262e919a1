//! Line-oriented `KEY = value` parsing

use std::collections::HashMap;
use std::path::Path;

use crate::{CancellationFlag, Error, Result};

/// Normalized option keys mapped to their raw values.
///
/// Keys are stored upper-cased so lookups are case-insensitive; values are
/// kept exactly as parsed. A table is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    entries: HashMap<String, String>,
}

impl OptionTable {
    /// Parse option text, reading every line.
    pub fn parse(text: &str) -> Self {
        parse_lines(split_lines(text), &CancellationFlag::new())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value stored under an already-normalized key.
    pub(crate) fn raw(&self, normalized_key: &str) -> Option<&str> {
        self.entries.get(normalized_key).map(String::as_str)
    }

    /// Iterate over `(normalized key, raw value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Upper-case a key the same way for both parsing and lookups.
pub(crate) fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

/// Split option text into lines.
///
/// Breaks on `\r\n`, `\r`, `\n`, NEL (U+0085), LINE SEPARATOR (U+2028) and
/// PARAGRAPH SEPARATOR (U+2029). A leading byte order mark is dropped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text.strip_prefix('\u{feff}').unwrap_or(text));
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(LINE_BREAKS) {
            Some(at) => {
                let tail = &current[at..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = Some(&tail[width..]);
                Some(&current[..at])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

const LINE_BREAKS: [char; 5] = ['\r', '\n', '\u{85}', '\u{2028}', '\u{2029}'];

/// Parse a sequence of lines into an [`OptionTable`].
///
/// - Lines are trimmed; blank lines and lines starting with `;` or `#` are skipped.
/// - A line without `=` is skipped.
/// - The key is everything before the first `=`, right-trimmed and upper-cased.
/// - The value is everything after the first `=`, left-trimmed only.
/// - A repeated key overwrites the earlier value.
///
/// `cancel` is checked before each line; once set, reading stops and the
/// entries parsed so far are returned.
pub fn parse_lines<I, S>(lines: I, cancel: &CancellationFlag) -> OptionTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = HashMap::new();

    for line in lines {
        if cancel.is_cancelled() {
            tracing::debug!(parsed = entries.len(), "Option parsing cancelled");
            break;
        }

        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        // Splitting once keeps any further '=' inside the value.
        let Some((raw_key, raw_value)) = line.split_once('=') else {
            continue;
        };

        let key = normalize_key(raw_key.trim_end());
        if key.trim().is_empty() {
            continue;
        }

        // Only the left side of the value is trimmed.
        let value = raw_value.trim_start().to_string();

        tracing::debug!(key = %key, value = %value, "Parsed option");
        entries.insert(key, value);
    }

    OptionTable { entries }
}

/// Parse option text that may be absent.
///
/// Returns `None` only when `text` itself is `None`; present text with no
/// usable lines yields an empty table.
pub fn parse_options(text: Option<&str>, cancel: &CancellationFlag) -> Option<OptionTable> {
    text.map(|text| parse_lines(split_lines(text), cancel))
}

/// Read and parse an option file.
pub fn load_options(path: impl AsRef<Path>) -> Result<OptionTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "Loaded option file");
    Ok(OptionTable::parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let table = OptionTable::parse("  Key1  =  = Value1 ");
        assert_eq!(table.raw("KEY1"), Some("= Value1"));
    }

    #[test]
    fn test_key_with_only_whitespace_is_skipped() {
        let table = OptionTable::parse("   = value");
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_value_is_kept() {
        let table = OptionTable::parse("Prefix=");
        assert_eq!(table.raw("PREFIX"), Some(""));
    }

    #[test]
    fn test_split_lines_keeps_blank_lines_between_breaks() {
        let lines: Vec<&str> = split_lines("a\r\n\nb\rc").collect();
        assert_eq!(lines, vec!["a", "", "b", "c"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = OptionTable::parse("A=1\r\nB=2\r\n");
        assert_eq!(table.raw("A"), Some("1"));
        assert_eq!(table.raw("B"), Some("2"));
    }
}
