/// Embedding capability errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("unknown embedding provider: {name}")]
    UnknownProvider { name: String },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("worker pool setup failed: {reason}")]
    WorkerPool { reason: String },
}

impl super::TriageErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        super::error_code::EMBEDDING_ERROR
    }
}
