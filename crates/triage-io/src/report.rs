//! Excel report sink.
//!
//! Sheet `Overview`:
//!
//! ```text
//! row 0      metric | value
//! rows 1-7   one KPI per row, undefined values left blank
//! row 8      (blank)
//! row 9      cluster | label | count_total | share_%
//! rows 10..  top clusters
//! ```
//!
//! Optional sheet `Assignments`: one row per deduplicated entry.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use triage_core::constants::{ASSIGNMENTS_SHEET, OVERVIEW_SHEET};
use triage_core::errors::{ReportError, TriageResult};
use triage_core::models::{AssignmentRow, Report, TopClusterRow};
use triage_core::traits::IReportSink;
use tracing::info;

const KPI_HEADERS: [&str; 2] = ["metric", "value"];
const CLUSTER_HEADERS: [&str; 4] = ["cluster", "label", "count_total", "share_%"];
const ASSIGNMENT_HEADERS: [&str; 5] = ["cluster", "label", "occurrences", "text", "canonical_key"];

/// Writes a [`Report`] to an `.xlsx` workbook.
pub struct XlsxReportSink {
    path: PathBuf,
    include_assignments: bool,
}

impl XlsxReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_assignments: false,
        }
    }

    /// Also write the `Assignments` drill-down sheet.
    pub fn with_assignments(mut self, include: bool) -> Self {
        self.include_assignments = include;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Row of the top-cluster table header: KPI header, KPI rows, one gap.
    pub fn cluster_header_row(report: &Report) -> u32 {
        report.kpis.metrics().len() as u32 + 2
    }

    fn build(&self, report: &Report) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        let overview = workbook.add_worksheet();
        overview.set_name(OVERVIEW_SHEET)?;
        write_overview(overview, report, &bold)?;

        if self.include_assignments {
            let sheet = workbook.add_worksheet();
            sheet.set_name(ASSIGNMENTS_SHEET)?;
            write_assignments(sheet, &report.assignments, &bold)?;
        }
        Ok(workbook)
    }
}

impl IReportSink for XlsxReportSink {
    fn write(&self, report: &Report) -> TriageResult<()> {
        let write_failed = |e: XlsxError| ReportError::WriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        };
        let mut workbook = self.build(report).map_err(write_failed)?;
        workbook.save(&self.path).map_err(write_failed)?;

        info!(
            path = %self.path.display(),
            top_clusters = report.top_clusters.len(),
            assignments = self.include_assignments.then_some(report.assignments.len()),
            "report written"
        );
        Ok(())
    }
}

fn write_header(
    sheet: &mut Worksheet,
    row: u32,
    headers: &[&str],
    bold: &Format,
) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *header, bold)?;
    }
    Ok(())
}

fn write_overview(sheet: &mut Worksheet, report: &Report, bold: &Format) -> Result<(), XlsxError> {
    write_header(sheet, 0, &KPI_HEADERS, bold)?;
    for (i, (metric, value)) in report.kpis.metrics().into_iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, metric)?;
        if let Some(value) = value {
            sheet.write_number(row, 1, value)?;
        }
    }

    let header_row = XlsxReportSink::cluster_header_row(report);
    write_header(sheet, header_row, &CLUSTER_HEADERS, bold)?;
    for (i, row) in report.top_clusters.iter().enumerate() {
        write_cluster_row(sheet, header_row + 1 + i as u32, row)?;
    }
    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 40)?;
    Ok(())
}

fn write_cluster_row(
    sheet: &mut Worksheet,
    row: u32,
    cluster: &TopClusterRow,
) -> Result<(), XlsxError> {
    sheet.write_number(row, 0, cluster.cluster_id)?;
    sheet.write_string(row, 1, &cluster.label)?;
    sheet.write_number(row, 2, cluster.total_occurrences as f64)?;
    sheet.write_number(row, 3, cluster.share_percent)?;
    Ok(())
}

fn write_assignments(
    sheet: &mut Worksheet,
    rows: &[AssignmentRow],
    bold: &Format,
) -> Result<(), XlsxError> {
    write_header(sheet, 0, &ASSIGNMENT_HEADERS, bold)?;
    for (i, entry) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, entry.cluster_id)?;
        sheet.write_string(row, 1, &entry.label)?;
        sheet.write_number(row, 2, entry.total_occurrences as f64)?;
        sheet.write_string(row, 3, &entry.representative_text)?;
        sheet.write_string(row, 4, &entry.canonical_key)?;
    }
    sheet.set_column_width(3, 60)?;
    sheet.set_column_width(4, 40)?;
    Ok(())
}
