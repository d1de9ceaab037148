//! Top-level error aggregating every subsystem error.

use super::error_code::TriageErrorCode;
use super::{ClusteringError, ConfigError, EmbeddingError, InputError, PipelineError, ReportError};

/// Convenience alias used across the workspace.
pub type TriageResult<T> = Result<T, TriageError>;

/// Errors that can stop a triage run.
/// Subsystem errors convert via `From`, so stages propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl TriageError {
    /// Shorthand for the shape check every stage boundary performs.
    pub fn shape_mismatch(stage: &'static str, expected: usize, actual: usize) -> Self {
        PipelineError::ShapeMismatch {
            stage,
            expected,
            actual,
        }
        .into()
    }
}

impl TriageErrorCode for TriageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Clustering(e) => e.error_code(),
            Self::Pipeline(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
