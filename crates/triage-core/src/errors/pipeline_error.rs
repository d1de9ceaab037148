//! Pipeline invariant violations.

use super::error_code::{self, TriageErrorCode};

/// Errors that indicate a programming defect between stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Stage outputs that must be index-aligned have different lengths.
    #[error("shape mismatch in {stage}: expected {expected} items, got {actual}")]
    ShapeMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl TriageErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        error_code::SHAPE_MISMATCH
    }
}
