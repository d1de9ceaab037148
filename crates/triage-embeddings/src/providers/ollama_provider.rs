//! Ollama embedding provider.
//!
//! Sends batches to a local Ollama instance (`POST /api/embed`).
//! Health-checked once at construction time by `create_provider`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use triage_core::errors::{EmbeddingError, TriageResult};
use triage_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

/// Ollama embedding provider.
pub struct OllamaProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    dimensions: usize,
    available: AtomicBool,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn new(
        model: String,
        dimensions: usize,
        base_url: String,
        timeout: Duration,
    ) -> TriageResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("ollama client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            dimensions,
            // Must pass health check first.
            available: AtomicBool::new(false),
        })
    }

    /// Check if the Ollama server is reachable.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let healthy = match self.client.get(&url).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(healthy, Ordering::Relaxed);
        healthy
    }

    fn request_embeddings(&self, texts: &[String]) -> TriageResult<Vec<Vec<f32>>> {
        if !self.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let url = format!("{}/api/embed", self.base_url);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Ollama HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("Ollama returned {status}: {body}"),
            }
            .into());
        }

        let resp: OllamaEmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Ollama JSON parse error: {e}"),
                })?;

        checked_vectors(resp, self.dimensions)
    }
}

/// Vectors of `resp`, each required to be exactly `dims` wide.
fn checked_vectors(resp: OllamaEmbedResponse, dims: usize) -> TriageResult<Vec<Vec<f32>>> {
    if let Some(bad) = resp.embeddings.iter().find(|v| v.len() != dims) {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dims,
            actual: bad.len(),
        }
        .into());
    }
    Ok(resp.embeddings)
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> TriageResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty Ollama response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> TriageResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::TriageError;

    #[test]
    fn unchecked_provider_refuses_requests() {
        let provider = OllamaProvider::new(
            "nomic-embed-text".to_string(),
            16,
            "http://127.0.0.1:9/".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();
        assert!(!provider.is_available());
        assert!(provider.embed("hello").is_err());
        assert!(provider.embed_batch(&[]).unwrap().is_empty());
    }

    fn response(body: &str) -> OllamaEmbedResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn matching_width_is_accepted() {
        let resp = response(r#"{"embeddings": [[0.1, 0.2], [0.3, 0.4]]}"#);
        let vectors = checked_vectors(resp, 2).unwrap();
        assert_eq!(vectors, vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    }

    #[test]
    fn wider_server_vectors_are_rejected() {
        let body = format!(r#"{{"embeddings": [{:?}]}}"#, vec![0.5f32; 768]);
        let err = checked_vectors(response(&body), 384).unwrap_err();
        assert!(matches!(
            err,
            TriageError::Embedding(EmbeddingError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        ));
    }

    #[test]
    fn narrower_server_vectors_are_rejected() {
        let err = checked_vectors(response(r#"{"embeddings": [[1.0, 2.0]]}"#), 4).unwrap_err();
        assert!(matches!(
            err,
            TriageError::Embedding(EmbeddingError::DimensionMismatch {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn request_body_uses_ollama_field_names() {
        let input = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(OllamaEmbedRequest {
            model: "m",
            input: &input,
        })
        .unwrap();
        assert_eq!(body["model"], "m");
        assert_eq!(body["input"][1], "b");
    }
}
