use crate::models::ScoredPhrase;

/// Unsupervised keyword extraction over a block of text.
pub trait IKeywordExtractor {
    /// Up to `top_k` phrases of at most `max_ngram` words, best first
    /// (ascending score). Empty when the text yields no candidates.
    fn extract(&self, text: &str, top_k: usize, max_ngram: usize) -> Vec<ScoredPhrase>;
}
