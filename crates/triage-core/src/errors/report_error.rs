/// Report sink errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl super::TriageErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        super::error_code::REPORT_ERROR
    }
}
