use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding capability configuration (`embedding:` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "hashing" or "ollama".
    pub provider: String,
    /// Model requested from the provider. Ignored by "hashing".
    pub model_name: String,
    /// Texts per provider call.
    pub batch_size: usize,
    /// Worker threads embedding batches concurrently.
    pub n_jobs: usize,
    /// Vector width. Remote vectors of any other width fail the run.
    pub dimensions: usize,
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// HTTP timeout for remote providers.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_name: defaults::DEFAULT_MODEL_NAME.to_string(),
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            n_jobs: defaults::DEFAULT_EMBEDDING_N_JOBS,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            base_url: defaults::DEFAULT_OLLAMA_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
