//! Response document handed to hosting layers.

use serde::{Deserialize, Serialize};

use crate::metrics::SummaryMetrics;
use crate::summarize::Summary;

/// Summarization mode reported in responses.
pub const EXTRACTIVE_MODE: &str = "extractive";

/// Summary plus metrics, serialized as `{ summary, keywords, points, metrics, mode }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub keywords: Vec<String>,
    pub points: Vec<String>,
    pub metrics: SummaryMetrics,
    pub mode: String,
}

impl SummaryResponse {
    /// Attach metrics computed against the `original` document.
    pub fn from_summary(original: &str, summary: Summary) -> Self {
        let metrics = SummaryMetrics::compute(original, &summary.summary);
        Self {
            summary: summary.summary,
            keywords: summary.keywords,
            points: summary.points,
            metrics,
            mode: EXTRACTIVE_MODE.to_string(),
        }
    }
}
