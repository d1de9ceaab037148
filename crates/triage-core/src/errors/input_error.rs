//! Input table errors.

use super::error_code::{self, TriageErrorCode};

/// Errors raised while reading the ticket table.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// The header row has no column with the given name.
    #[error("{path}: required column '{column}' is missing")]
    MissingColumn { path: String, column: String },

    /// A data row (1-based) lacks the required text field.
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

impl TriageErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } | Self::MalformedRow { .. } => error_code::MALFORMED_INPUT,
            Self::FileNotFound { .. } | Self::ReadFailed { .. } => error_code::INPUT_ERROR,
        }
    }
}
