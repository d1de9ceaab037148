//! Feature-hashing embedding provider.
//!
//! Generates fixed-dimension vectors from term and adjacent-term-pair
//! frequencies hashed into buckets. No model, no network: works offline and
//! is fully deterministic.

use std::collections::HashMap;

use triage_core::errors::TriageResult;
use triage_core::traits::IEmbeddingProvider;

/// Weight of a word pair relative to a single word.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Hashing embedding provider.
///
/// Texts sharing vocabulary land close together under cosine or euclidean
/// distance after L2 normalization. Not as semantically rich as neural
/// embeddings, but always available.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a feature into a bucket index using FNV-1a.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Tokenize text into lowercase word terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *tf.entry(format!("{} {}", pair[0], pair[1])).or_default() += BIGRAM_WEIGHT;
        }

        let total = tokens.len() as f32;
        for (feature, count) in &tf {
            // Longer terms carry more signal than short function words.
            let idf = 1.0 + (feature.chars().count() as f32).ln();
            vec[Self::bucket(feature, self.dimensions)] += count / total * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> TriageResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TriageResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_available(&self) -> bool {
        true
    }
}
