//! Length statistics comparing a document with its summary.

use serde::{Deserialize, Serialize};

/// Word and sentence counts before and after summarizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub original_word_count: usize,
    pub original_sentence_count: usize,
    pub summary_word_count: usize,
    pub summary_sentence_count: usize,
    /// Percentage of words removed, rounded to two decimals.
    /// Serialized as a fixed two-decimal string (`"75.00"`).
    #[serde(with = "two_decimals")]
    pub compression_ratio: f64,
    /// Summary is at most a third of the original's length in words.
    pub follows_one_third_rule: bool,
}

impl SummaryMetrics {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_word_count = word_count(original);
        let summary_word_count = word_count(summary);

        let compression_ratio = if original_word_count == 0 {
            0.0
        } else {
            let removed = original_word_count as f64 - summary_word_count as f64;
            round2(removed / original_word_count as f64 * 100.0)
        };

        Self {
            original_word_count,
            original_sentence_count: sentence_count(original),
            summary_word_count,
            summary_sentence_count: sentence_count(summary),
            compression_ratio,
            follows_one_third_rule: summary_word_count as f64 <= original_word_count as f64 / 3.0,
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentences here end at `.`, `!` or `?`, unlike the summarizer's own segmentation.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

mod two_decimals {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.2}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
