//! Summarizer configuration with environment overrides.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Number of sentences selected for the summary and points.
pub const DEFAULT_MAX_POINTS: usize = 4;
/// Number of keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 6;
/// A normalized sentence must be strictly longer than this to be a candidate.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 30;
/// A word must be strictly longer than this to be counted.
pub const DEFAULT_MIN_WORD_CHARS: usize = 3;
/// Minimum document length accepted by callers before summarizing.
pub const DEFAULT_MIN_INPUT_CHARS: usize = 100;

/// Tunables for the extractive summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Sentences kept in the summary (and in `points`).
    pub max_points: usize,
    /// Keywords kept, highest frequency first.
    pub max_keywords: usize,
    /// Trimmed sentence length threshold (exclusive).
    pub min_sentence_chars: usize,
    /// Word length threshold (exclusive) for the frequency table.
    pub min_word_chars: usize,
    /// Minimum trimmed input length callers enforce before summarizing.
    pub min_input_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            min_word_chars: DEFAULT_MIN_WORD_CHARS,
            min_input_chars: DEFAULT_MIN_INPUT_CHARS,
        }
    }
}

impl SummarizerConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            max_points: read_usize(&lookup, "PRECIS_MAX_POINTS", defaults.max_points)?,
            max_keywords: read_usize(&lookup, "PRECIS_MAX_KEYWORDS", defaults.max_keywords)?,
            min_sentence_chars: read_usize(
                &lookup,
                "PRECIS_MIN_SENTENCE_CHARS",
                defaults.min_sentence_chars,
            )?,
            min_word_chars: read_usize(&lookup, "PRECIS_MIN_WORD_CHARS", defaults.min_word_chars)?,
            min_input_chars: read_usize(
                &lookup,
                "PRECIS_MIN_INPUT_CHARS",
                defaults.min_input_chars,
            )?,
        };
        debug!(?config, "Loaded summarizer configuration");
        Ok(config)
    }
}

fn read_usize<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{key} must be a non-negative integer, got {raw:?}"))),
        None => Ok(default),
    }
}
