//! Provider registry.
//!
//! - `hashing`: feature-hashed term vectors, always available
//! - `ollama`: embeddings served by a local Ollama instance

pub mod hashing_provider;
pub mod ollama_provider;

pub use hashing_provider::HashingProvider;
pub use ollama_provider::OllamaProvider;

use std::time::Duration;

use triage_core::config::EmbeddingConfig;
use triage_core::errors::{EmbeddingError, TriageResult};
use triage_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider, returning it boxed.
///
/// There is no fallback: an unreachable backend fails the run.
pub fn create_provider(config: &EmbeddingConfig) -> TriageResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "hashing" => {
            info!(provider = "hashing", dims = config.dimensions, "embedding provider ready");
            Ok(Box::new(HashingProvider::new(config.dimensions)))
        }
        "ollama" => {
            let provider = OllamaProvider::new(
                config.model_name.clone(),
                config.dimensions,
                config.base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            if !provider.health_check() {
                return Err(EmbeddingError::ProviderUnavailable {
                    provider: format!("ollama at {}", config.base_url),
                }
                .into());
            }
            info!(provider = "ollama", model = %config.model_name, "embedding provider connected");
            Ok(Box::new(provider))
        }
        other => Err(EmbeddingError::UnknownProvider {
            name: other.to_string(),
        }
        .into()),
    }
}
