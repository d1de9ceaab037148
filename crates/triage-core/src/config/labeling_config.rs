use serde::{Deserialize, Serialize};

use super::defaults;

/// Labeler configuration (`labeling:` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelingConfig {
    /// Priority-ordered keywords; the first one found in a cluster wins.
    pub keywords: Vec<String>,
    /// Candidate phrases requested from keyword extraction.
    pub yake_topk: usize,
    /// Longest extracted phrase, in words.
    pub yake_max_ngram: usize,
    /// Replaces the computed label of the noise cluster when set.
    pub noise_label: Option<String>,
}

impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            yake_topk: defaults::DEFAULT_YAKE_TOPK,
            yake_max_ngram: defaults::DEFAULT_YAKE_MAX_NGRAM,
            noise_label: None,
        }
    }
}
