//! Batched embedding on a dedicated worker pool.
//!
//! Texts are split into `batch_size` chunks; chunks are embedded concurrently
//! on a rayon pool of `n_jobs` threads and reassembled in input order.

use rayon::prelude::*;
use rayon::ThreadPool;
use triage_core::config::EmbeddingConfig;
use triage_core::errors::{EmbeddingError, TriageError, TriageResult};
use triage_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::providers::create_provider;

/// Wraps a provider with batching and a bounded worker pool.
pub struct BatchedEmbedder {
    provider: Box<dyn IEmbeddingProvider>,
    batch_size: usize,
    pool: ThreadPool,
}

impl BatchedEmbedder {
    pub fn new(
        provider: Box<dyn IEmbeddingProvider>,
        batch_size: usize,
        n_jobs: usize,
    ) -> TriageResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_jobs.max(1))
            .thread_name(|i| format!("embed-{i}"))
            .build()
            .map_err(|e| EmbeddingError::WorkerPool {
                reason: e.to_string(),
            })?;
        Ok(Self {
            provider,
            batch_size: batch_size.max(1),
            pool,
        })
    }

    /// Build the configured provider and wrap it.
    pub fn from_config(config: &EmbeddingConfig) -> TriageResult<Self> {
        Self::new(create_provider(config)?, config.batch_size, config.n_jobs)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl IEmbeddingProvider for BatchedEmbedder {
    fn embed(&self, text: &str) -> TriageResult<Vec<f32>> {
        self.provider.embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> TriageResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let batches: Vec<TriageResult<Vec<Vec<f32>>>> = self.pool.install(|| {
            texts
                .par_chunks(self.batch_size)
                .map(|chunk| self.provider.embed_batch(chunk))
                .collect()
        });
        debug!(
            batches = batches.len(),
            workers = self.workers(),
            "embedding batches finished"
        );

        let mut vectors = Vec::with_capacity(texts.len());
        for batch in batches {
            vectors.extend(batch?);
        }
        if vectors.len() != texts.len() {
            return Err(TriageError::shape_mismatch("embed", texts.len(), vectors.len()));
        }

        let dims = vectors[0].len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dims) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dims,
                actual: bad.len(),
            }
            .into());
        }

        info!(
            provider = self.provider.name(),
            count = vectors.len(),
            dims,
            "embeddings computed"
        );
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
