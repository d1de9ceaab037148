//! TriageErrorCode trait for surfacing errors on the command line.

/// Every error enum provides a stable, machine-greppable code.
pub trait TriageErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error line: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const CLUSTERING_ERROR: &str = "CLUSTERING_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
