use crate::errors::TriageResult;
use crate::models::Report;

/// Persists a finished report.
pub trait IReportSink {
    fn write(&self, report: &Report) -> TriageResult<()>;
}
