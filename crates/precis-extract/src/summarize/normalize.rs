//! Text normalization and sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

/// ECMAScript whitespace. Unlike Unicode `\s`, it includes U+FEFF and excludes U+0085.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{WHITESPACE_CLASS}]+")).unwrap());

/// Anything that is not an ASCII word character, whitespace, or a literal period.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[^A-Za-z0-9_.{WHITESPACE_CLASS}]")).unwrap());

/// Collapse whitespace runs to one space, strip punctuation except `.`, lowercase.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    DISALLOWED.replace_all(&collapsed, "").to_lowercase()
}

/// Split normalized text on `.` and keep segments whose trimmed length exceeds `min_chars`.
///
/// Only `.` terminates a sentence; `!` and `?` were already stripped by [`normalize`].
/// Segments are returned untrimmed, in document order.
pub fn split_sentences(normalized: &str, min_chars: usize) -> Vec<&str> {
    normalized
        .split('.')
        .filter(|s| s.trim().chars().count() > min_chars)
        .collect()
}
