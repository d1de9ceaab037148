//! Canonical-key normalization of ticket text.
//!
//! NFKC → ignore-word removal → lowercase → punctuation to space →
//! whitespace collapse → stop-word removal → domain-term re-append.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use triage_core::config::{IgnoreMatch, TriageConfig};
use triage_core::errors::ConfigError;
use unicode_normalization::UnicodeNormalization;

use crate::stop_words::NORMALIZER_STOP_WORDS;

/// Anything that is neither a word character nor whitespace.
static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Inputs of a [`Normalizer`]. All lists are taken verbatim.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub ignore_words: Vec<String>,
    pub domain_terms: Vec<String>,
    pub ignore_match: IgnoreMatch,
    pub stop_words: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            ignore_words: Vec::new(),
            domain_terms: Vec::new(),
            ignore_match: IgnoreMatch::Substring,
            stop_words: NORMALIZER_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl NormalizerConfig {
    /// Preprocessing settings of a run; domain terms fall back to the
    /// labeling keywords.
    pub fn from_triage_config(config: &TriageConfig) -> Self {
        Self {
            ignore_words: config.preprocessing.ignore_words.clone(),
            domain_terms: config.domain_terms().to_vec(),
            ignore_match: config.preprocessing.ignore_match,
            ..Self::default()
        }
    }
}

/// Compiled normalizer. Immutable once built; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    ignore_patterns: Vec<Regex>,
    /// Lowercased, non-empty.
    domain_terms: Vec<String>,
    stop_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Result<Self, ConfigError> {
        let ignore_patterns = config
            .ignore_words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| {
                let escaped = regex::escape(w);
                let pattern = match config.ignore_match {
                    IgnoreMatch::Substring => escaped,
                    IgnoreMatch::WholeWord => format!(r"\b{escaped}\b"),
                };
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| invalid_pattern(w, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let domain_terms = config
            .domain_terms
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            ignore_patterns,
            domain_terms,
            stop_words: config.stop_words.into_iter().collect(),
        })
    }

    pub fn from_triage_config(config: &TriageConfig) -> Result<Self, ConfigError> {
        Self::new(NormalizerConfig::from_triage_config(config))
    }

    /// Canonical key for `text`.
    pub fn normalize(&self, text: &str) -> String {
        let mut current: String = text.nfkc().collect();
        for pattern in &self.ignore_patterns {
            current = pattern.replace_all(&current, "").into_owned();
        }
        let lowered = current.to_lowercase();
        let spaced = PUNCTUATION_RE.replace_all(&lowered, " ");
        let collapsed = WHITESPACE_RE.replace_all(&spaced, " ");

        let mut key = collapsed
            .trim()
            .split(' ')
            .filter(|token| !token.is_empty() && !self.stop_words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ");

        if !self.domain_terms.is_empty() {
            let original = text.to_lowercase();
            for term in &self.domain_terms {
                if original.contains(term.as_str()) && !key.contains(term.as_str()) {
                    if !key.is_empty() {
                        key.push(' ');
                    }
                    key.push_str(term);
                }
            }
        }
        key
    }
}

/// One-shot normalization with the default stop words and substring
/// ignore matching.
pub fn normalize(
    text: &str,
    ignore_words: &[String],
    domain_terms: &[String],
) -> Result<String, ConfigError> {
    let normalizer = Normalizer::new(NormalizerConfig {
        ignore_words: ignore_words.to_vec(),
        domain_terms: domain_terms.to_vec(),
        ..NormalizerConfig::default()
    })?;
    Ok(normalizer.normalize(text))
}

fn invalid_pattern(word: &str, err: regex::Error) -> ConfigError {
    ConfigError::ValidationFailed {
        field: "preprocessing.ignore_words".to_string(),
        message: format!("cannot match {word:?}: {err}"),
    }
}
