use serde::{Deserialize, Serialize};

/// How ignore words are matched against ticket text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreMatch {
    /// Every case-insensitive occurrence, even inside longer words.
    #[default]
    Substring,
    /// Only occurrences delimited by word boundaries.
    WholeWord,
}

/// Normalizer configuration (`preprocessing:` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingConfig {
    /// Literal strings stripped from ticket text before comparison.
    pub ignore_words: Vec<String>,
    /// Vocabulary re-appended when normalization loses it.
    /// `None` falls back to `labeling.keywords`.
    pub domain_terms: Option<Vec<String>>,
    pub ignore_match: IgnoreMatch,
}
