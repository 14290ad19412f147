//! Extractive summarization by term frequency.
//!
//! Pipeline: normalize → segment → count words → score sentences → select.
//! Every intermediate structure lives for one call only, so a single
//! [`Summarizer`] can be shared across threads freely.

pub mod frequency;
pub mod normalize;
pub mod rank;
pub mod stopwords;

use precis_core::SummarizerConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use frequency::WordFrequencyTable;

/// Result of summarizing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with `". "` and a trailing period.
    pub summary: String,
    /// Most frequent content words, highest count first.
    pub keywords: Vec<String>,
    /// The summary sentences as a list, in rank order.
    pub points: Vec<String>,
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Summarize `text`. Never fails: unusable input yields `"."` and empty lists.
    pub fn summarize(&self, text: &str) -> Summary {
        let normalized = normalize::normalize(text);
        let sentences = normalize::split_sentences(&normalized, self.config.min_sentence_chars);
        let table = WordFrequencyTable::build(&normalized, self.config.min_word_chars);

        let scored = rank::score_sentences(&sentences, &table);
        let points = rank::top_sentences(scored, self.config.max_points);
        let keywords = table.top_keywords(self.config.max_keywords);

        debug!(
            candidates = sentences.len(),
            distinct_words = table.len(),
            points = points.len(),
            keywords = keywords.len(),
            "Summarized document"
        );

        Summary {
            summary: format!("{}.", points.join(". ")),
            keywords,
            points,
        }
    }
}

/// Summarize with the default configuration (4 points, 6 keywords).
pub fn summarize(text: &str) -> Summary {
    Summarizer::default().summarize(text)
}
