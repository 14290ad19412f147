//! Sentence scoring and selection.

use super::frequency::WordFrequencyTable;

/// A candidate sentence with its frequency score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub score: usize,
    /// Index among the candidate sentences, in document order.
    pub position: usize,
}

/// Score each sentence as the sum of table counts of its space-separated tokens.
pub fn score_sentences<'a>(
    sentences: &[&'a str],
    table: &WordFrequencyTable,
) -> Vec<ScoredSentence<'a>> {
    sentences
        .iter()
        .enumerate()
        .map(|(position, &text)| ScoredSentence {
            text,
            score: text.split(' ').map(|w| table.get(w)).sum(),
            position,
        })
        .collect()
}

/// Highest-scoring `n` sentences, trimmed. Equal scores keep document order.
pub fn top_sentences(mut scored: Vec<ScoredSentence<'_>>, n: usize) -> Vec<String> {
    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));
    scored
        .into_iter()
        .take(n)
        .map(|s| s.text.trim().to_string())
        .collect()
}
