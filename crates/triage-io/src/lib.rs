//! # triage-io
//!
//! File boundaries of the triage pipeline: reading the ticket table and
//! writing the report workbook.

pub mod input;
pub mod report;

pub use input::load_records;
pub use report::XlsxReportSink;
