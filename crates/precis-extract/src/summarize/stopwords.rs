//! Closed English stopword set excluded from frequency counting.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words that carry no topical signal.
pub const STOPWORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "of", "a", "for", "on", "with", "as", "by", "an", "be",
    "are", "this", "that", "it", "from", "or", "at", "was", "were",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Whether `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}
