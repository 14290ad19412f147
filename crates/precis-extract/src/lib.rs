//! Precis Extract — normalization, term-frequency scoring, sentence ranking, keyword extraction.

pub mod metrics;
pub mod response;
pub mod summarize;
pub mod validate;

pub use metrics::SummaryMetrics;
pub use response::SummaryResponse;
pub use summarize::{Summarizer, Summary, summarize};
pub use validate::validate_document;
