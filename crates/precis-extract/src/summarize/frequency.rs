//! Word frequency table over a normalized document.

use std::collections::HashMap;

use super::stopwords::is_stopword;

/// Occurrence counts of content words, remembering first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    /// (word, count) in first-encounter order.
    entries: Vec<(String, usize)>,
    /// word → position in `entries`.
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count every space-separated token of `normalized` that is not a stopword
    /// and is longer than `min_word_chars`.
    ///
    /// Tokens are taken verbatim, so a word directly before a period keeps it
    /// (`"time."` and `"time"` are distinct entries).
    pub fn build(normalized: &str, min_word_chars: usize) -> Self {
        let mut table = Self::default();
        for word in normalized.split(' ') {
            if is_stopword(word) || word.chars().count() <= min_word_chars {
                continue;
            }
            table.increment(word);
        }
        table
    }

    fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Count for `word`, 0 if it was never counted.
    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `k` most frequent words; ties keep first-encounter order.
    pub fn top_keywords(&self, k: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(k).map(|(w, _)| w.clone()).collect()
    }
}
