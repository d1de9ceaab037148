//! YAKE-style unsupervised keyword extraction.
//!
//! Every term gets five statistical features (casing, position, frequency,
//! context relatedness, sentence spread) combined into a term weight `H`.
//! Candidate n-grams score `ΠH / (tf · (1 + ΣH))` over their non-stop-word
//! terms. Lower is better. Near-duplicate candidates are dropped with a
//! Levenshtein similarity cutoff.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use triage_core::models::ScoredPhrase;
use triage_core::traits::IKeywordExtractor;

use super::sentence_splitter::split_sentences;
use super::similarity::{is_overlap, levenshtein_similarity};
use crate::stop_words::EXTRACTION_STOP_WORDS;

/// Words, allowing inner apostrophes and hyphens (`can't`, `sap-gui`).
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:['’-]\w+)*").unwrap());

/// Punctuation that ends a phrase inside a sentence.
static CHUNK_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;:()\[\]{}/|]+").unwrap());

/// Terms shorter than this never start or end a candidate.
const MIN_TERM_CHARS: usize = 3;

/// Co-occurrence window, in words.
const WINDOW: usize = 1;

struct Token<'a> {
    surface: &'a str,
    key: String,
    sentence_start: bool,
}

/// A run of words between phrase-breaking punctuation.
struct Chunk<'a> {
    sentence: usize,
    tokens: Vec<Token<'a>>,
}

#[derive(Default)]
struct TermStats {
    tf: usize,
    tf_acronym: usize,
    tf_capitalized: usize,
    sentences: Vec<usize>,
    left: HashMap<String, usize>,
    right: HashMap<String, usize>,
    stop_word: bool,
}

struct Candidate {
    terms: Vec<String>,
    tf: usize,
}

/// YAKE keyword extractor with a fixed stop-word list.
pub struct YakeExtractor {
    stop_words: HashSet<String>,
}

impl Default for YakeExtractor {
    fn default() -> Self {
        Self::new(EXTRACTION_STOP_WORDS.iter().map(|w| w.to_string()))
    }
}

impl YakeExtractor {
    pub fn new(stop_words: impl IntoIterator<Item = String>) -> Self {
        Self {
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    fn is_stop_word(&self, key: &str) -> bool {
        key.chars().count() < MIN_TERM_CHARS || self.stop_words.contains(key)
    }

    fn chunks<'a>(&self, text: &'a str) -> (Vec<Chunk<'a>>, usize) {
        let sentences = split_sentences(text);
        let mut chunks = Vec::new();
        let mut offset = 0;
        for (sentence_idx, sentence) in sentences.iter().enumerate() {
            // Recover a slice of `text` so tokens borrow from the input.
            let Some(start) = text[offset..].find(sentence.as_str()).map(|i| i + offset) else {
                continue;
            };
            offset = start + sentence.len();
            let sentence_text = &text[start..offset];

            let mut first_in_sentence = true;
            for part in CHUNK_BREAK_RE.split(sentence_text) {
                let tokens: Vec<Token<'a>> = WORD_RE
                    .find_iter(part)
                    .map(|m| {
                        let token = Token {
                            surface: m.as_str(),
                            key: m.as_str().to_lowercase(),
                            sentence_start: first_in_sentence,
                        };
                        first_in_sentence = false;
                        token
                    })
                    .collect();
                if !tokens.is_empty() {
                    chunks.push(Chunk {
                        sentence: sentence_idx,
                        tokens,
                    });
                }
            }
        }
        (chunks, sentences.len())
    }

    fn term_stats(&self, chunks: &[Chunk<'_>]) -> HashMap<String, TermStats> {
        let mut stats: HashMap<String, TermStats> = HashMap::new();
        for chunk in chunks {
            for (i, token) in chunk.tokens.iter().enumerate() {
                let entry = stats.entry(token.key.clone()).or_default();
                entry.tf += 1;
                entry.sentences.push(chunk.sentence);
                entry.stop_word = self.is_stop_word(&token.key);
                if is_acronym(token.surface) {
                    entry.tf_acronym += 1;
                } else if !token.sentence_start && starts_uppercase(token.surface) {
                    entry.tf_capitalized += 1;
                }

                let lo = i.saturating_sub(WINDOW);
                for neighbor in &chunk.tokens[lo..i] {
                    *entry.left.entry(neighbor.key.clone()).or_default() += 1;
                }
                let hi = (i + 1 + WINDOW).min(chunk.tokens.len());
                for neighbor in &chunk.tokens[i + 1..hi] {
                    *entry.right.entry(neighbor.key.clone()).or_default() += 1;
                }
            }
        }
        stats
    }

    fn term_weights(
        stats: &HashMap<String, TermStats>,
        sentence_count: usize,
    ) -> HashMap<String, f64> {
        let max_tf = stats.values().map(|s| s.tf).max().unwrap_or(1) as f64;
        let content_tfs: Vec<f64> = stats
            .values()
            .filter(|s| !s.stop_word)
            .map(|s| s.tf as f64)
            .collect();
        let (mean_tf, std_tf) = mean_std(&content_tfs);
        let sentence_count = sentence_count.max(1) as f64;

        stats
            .iter()
            .map(|(key, s)| {
                let tf = s.tf as f64;
                let casing = s.tf_acronym.max(s.tf_capitalized) as f64 / (1.0 + tf.ln());
                let position = (3.0 + median(&s.sentences)).ln().ln();
                let frequency = tf / (mean_tf + std_tf).max(f64::EPSILON);
                let relatedness = 1.0
                    + (dispersion(&s.left) + dispersion(&s.right)) * (tf / max_tf);
                let distinct_sentences = s.sentences.iter().collect::<HashSet<_>>().len() as f64;
                let spread = distinct_sentences / sentence_count;

                let weight = (position * relatedness)
                    / (casing + frequency / relatedness + spread / relatedness);
                (key.clone(), weight)
            })
            .collect()
    }

    fn candidates(&self, chunks: &[Chunk<'_>], max_ngram: usize) -> Vec<Candidate> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut candidates: Vec<Candidate> = Vec::new();
        for chunk in chunks {
            let tokens = &chunk.tokens;
            for start in 0..tokens.len() {
                for len in 1..=max_ngram.min(tokens.len() - start) {
                    let window = &tokens[start..start + len];
                    let first = &window[0].key;
                    let last = &window[len - 1].key;
                    if self.is_stop_word(first) || self.is_stop_word(last) {
                        continue;
                    }
                    if window.iter().any(|t| is_numeric(&t.key)) {
                        continue;
                    }
                    let terms: Vec<String> = window.iter().map(|t| t.key.clone()).collect();
                    let phrase = terms.join(" ");
                    match index.get(&phrase) {
                        Some(&i) => candidates[i].tf += 1,
                        None => {
                            index.insert(phrase, candidates.len());
                            candidates.push(Candidate { terms, tf: 1 });
                        }
                    }
                }
            }
        }
        candidates
    }
}

impl IKeywordExtractor for YakeExtractor {
    fn extract(&self, text: &str, top_k: usize, max_ngram: usize) -> Vec<ScoredPhrase> {
        if top_k == 0 || max_ngram == 0 || text.trim().is_empty() {
            return Vec::new();
        }
        let (chunks, sentence_count) = self.chunks(text);
        if chunks.is_empty() {
            return Vec::new();
        }
        let stats = self.term_stats(&chunks);
        let weights = Self::term_weights(&stats, sentence_count);

        let mut scored: Vec<ScoredPhrase> = self
            .candidates(&chunks, max_ngram)
            .into_iter()
            .map(|c| {
                let mut product = 1.0;
                let mut sum = 0.0;
                for term in c.terms.iter().filter(|t| !self.is_stop_word(t)) {
                    let h = weights.get(term).copied().unwrap_or(1.0);
                    product *= h;
                    sum += h;
                }
                ScoredPhrase {
                    phrase: c.terms.join(" "),
                    score: product / (c.tf as f64 * (1.0 + sum)),
                }
            })
            .collect();
        scored.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });

        let mut selected: Vec<ScoredPhrase> = Vec::with_capacity(top_k);
        for candidate in scored {
            if selected.len() >= top_k {
                break;
            }
            let duplicate = selected
                .iter()
                .any(|s| is_overlap(levenshtein_similarity(&s.phrase, &candidate.phrase)));
            if !duplicate {
                selected.push(candidate);
            }
        }
        selected
    }
}

/// Distinct neighbors over total neighbor occurrences, 0 without neighbors.
fn dispersion(neighbors: &HashMap<String, usize>) -> f64 {
    let total: usize = neighbors.values().sum();
    if total == 0 {
        0.0
    } else {
        neighbors.len() as f64 / total as f64
    }
}

fn median(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

fn is_acronym(surface: &str) -> bool {
    surface.chars().count() > 1
        && surface.chars().any(char::is_alphabetic)
        && surface.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

fn starts_uppercase(surface: &str) -> bool {
    surface.chars().next().is_some_and(char::is_uppercase)
}

fn is_numeric(key: &str) -> bool {
    key.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str, top_k: usize, max_ngram: usize) -> Vec<ScoredPhrase> {
        YakeExtractor::default().extract(text, top_k, max_ngram)
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract("", 10, 3).is_empty());
        assert!(extract("   ", 10, 3).is_empty());
    }

    #[test]
    fn stop_words_only_yield_nothing() {
        assert!(extract("the and of to", 10, 3).is_empty());
        assert!(extract("!!! ??? ...", 10, 3).is_empty());
    }

    #[test]
    fn scores_ascend_and_respect_limits() {
        let text = "Printer jam on floor two. Printer jam again in the office. \
                    The printer shows a paper jam error.";
        let phrases = extract(text, 4, 2);
        assert!(!phrases.is_empty());
        assert!(phrases.len() <= 4);
        assert!(phrases.windows(2).all(|w| w[0].score <= w[1].score));
        assert!(phrases.iter().all(|p| p.phrase.split(' ').count() <= 2));
    }

    #[test]
    fn frequent_terms_outrank_rare_ones() {
        let text = "Printer jam on floor two. Printer jam again in the office. \
                    The printer shows a paper jam error.";
        let phrases = extract(text, 50, 1);
        let rank = |word: &str| phrases.iter().position(|p| p.phrase == word);
        let printer = rank("printer").expect("printer extracted");
        let shows = rank("shows").expect("shows extracted");
        assert!(printer < shows, "{phrases:?}");
    }

    #[test]
    fn phrases_never_start_or_end_with_stop_words() {
        let extractor = YakeExtractor::default();
        let phrases = extractor.extract("the login of the portal fails for all users", 20, 3);
        for p in &phrases {
            let words: Vec<&str> = p.phrase.split(' ').collect();
            assert!(!extractor.is_stop_word(words[0]), "{}", p.phrase);
            assert!(!extractor.is_stop_word(words[words.len() - 1]), "{}", p.phrase);
        }
    }

    #[test]
    fn phrases_are_lowercase_and_do_not_cross_commas() {
        let phrases = extract("VPN drops, Outlook freezes", 20, 3);
        assert!(phrases.iter().all(|p| p.phrase == p.phrase.to_lowercase()));
        assert!(phrases.iter().all(|p| !p.phrase.contains("drops outlook")));
    }

    #[test]
    fn numbers_are_not_candidates() {
        let phrases = extract("Error 404 on portal 2024", 20, 1);
        assert!(phrases.iter().all(|p| p.phrase != "404" && p.phrase != "2024"));
    }

    #[test]
    fn near_duplicates_are_collapsed() {
        let phrases = extract("password reset. password resets. password reset", 10, 2);
        let resets = phrases
            .iter()
            .filter(|p| p.phrase.starts_with("password reset"))
            .count();
        assert_eq!(resets, 1, "{phrases:?}");
    }

    #[test]
    fn median_handles_even_and_odd() {
        assert_eq!(median(&[3, 1, 2]), 2.0);
        assert_eq!(median(&[4, 1, 3, 2]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }
}
