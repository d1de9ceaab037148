//! Ticket table readers.
//!
//! `.csv` files go through the `csv` crate; everything else is opened as a
//! spreadsheet workbook (first sheet). Both are reduced to a header row plus
//! typed cells before records are built, so the row rules below apply to
//! every format:
//!
//! - a row with no data at all is skipped;
//! - a row with data but no `text` value is malformed;
//! - `occurrences` falls back to 1 when blank, non-numeric, or below 1.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use triage_core::constants::{DEFAULT_OCCURRENCES, OCCURRENCES_COLUMN, TEXT_COLUMN};
use triage_core::errors::{InputError, TriageResult};
use triage_core::models::RawRecord;
use tracing::{debug, info, warn};

/// A cell reduced to the shapes the record rules care about.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Int(_) | Cell::Float(_) => false,
        }
    }
}

struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Read all ticket records from `path`, in file order.
pub fn load_records(path: &Path) -> TriageResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let table = if is_csv(path) {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };
    let records = build_records(path, table)?;
    info!(path = %path.display(), records = records.len(), "input loaded");
    Ok(records)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn read_failed(path: &Path, message: impl ToString) -> InputError {
    InputError::ReadFailed {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<Table, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| read_failed(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| read_failed(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| read_failed(path, e))?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(Table { headers, rows })
}

fn read_workbook(path: &Path) -> Result<Table, InputError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| read_failed(path, e))?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(read_failed(path, "workbook has no sheets"));
    };
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| read_failed(path, e))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect())
        .unwrap_or_default();
    let rows = rows.map(|row| row.iter().map(cell_from_data).collect()).collect();
    debug!(sheet = %sheet, "reading first worksheet");
    Ok(Table { headers, rows })
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        other => Cell::Text(other.to_string()),
    }
}

fn build_records(path: &Path, table: Table) -> Result<Vec<RawRecord>, InputError> {
    let column = |name: &str| table.headers.iter().position(|h| h.trim() == name);
    let text_idx = column(TEXT_COLUMN).ok_or_else(|| InputError::MissingColumn {
        path: path.display().to_string(),
        column: TEXT_COLUMN.to_string(),
    })?;
    let occurrences_idx = column(OCCURRENCES_COLUMN);

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let row_number = i + 1;
        if row.iter().all(Cell::is_blank) {
            debug!(row = row_number, "skipping empty row");
            continue;
        }
        let text = match row.get(text_idx) {
            Some(Cell::Text(s)) if !s.trim().is_empty() => s.clone(),
            Some(Cell::Int(n)) => n.to_string(),
            Some(Cell::Float(f)) => f.to_string(),
            _ => {
                return Err(InputError::MalformedRow {
                    row: row_number,
                    reason: format!("missing value in column '{TEXT_COLUMN}'"),
                })
            }
        };
        let occurrences = occurrences_idx
            .and_then(|idx| row.get(idx))
            .map_or(DEFAULT_OCCURRENCES, |cell| coerce_occurrences(cell, row_number));
        records.push(RawRecord::new(text, occurrences));
    }
    Ok(records)
}

/// Occurrence count for a cell; 1 when blank or unusable.
fn coerce_occurrences(cell: &Cell, row: usize) -> u64 {
    let value = match cell {
        Cell::Empty => return DEFAULT_OCCURRENCES,
        Cell::Int(n) => Some(*n as f64),
        Cell::Float(f) => Some(*f),
        Cell::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return DEFAULT_OCCURRENCES;
            }
            s.parse::<i64>()
                .map(|n| n as f64)
                .or_else(|_| s.parse::<f64>())
                .ok()
        }
    };
    match value {
        Some(v) if v.is_finite() && v.trunc() >= 1.0 => v.trunc() as u64,
        _ => {
            warn!(row, value = ?cell, "invalid occurrences value, using 1");
            DEFAULT_OCCURRENCES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn occurrences_coercion() {
        assert_eq!(coerce_occurrences(&Cell::Int(4), 1), 4);
        assert_eq!(coerce_occurrences(&Cell::Float(3.9), 1), 3);
        assert_eq!(coerce_occurrences(&text(" 7 "), 1), 7);
        assert_eq!(coerce_occurrences(&text("2.5"), 1), 2);
        assert_eq!(coerce_occurrences(&text("many"), 1), 1);
        assert_eq!(coerce_occurrences(&Cell::Int(0), 1), 1);
        assert_eq!(coerce_occurrences(&Cell::Int(-3), 1), 1);
        assert_eq!(coerce_occurrences(&Cell::Float(f64::NAN), 1), 1);
        assert_eq!(coerce_occurrences(&Cell::Float(0.5), 1), 1);
        assert_eq!(coerce_occurrences(&Cell::Empty, 1), 1);
    }

    #[test]
    fn text_column_is_required() {
        let err = build_records(Path::new("t.csv"), table(&["body"], vec![])).unwrap_err();
        assert!(matches!(err, InputError::MissingColumn { ref column, .. } if column == "text"));
    }

    #[test]
    fn occurrences_column_is_optional() {
        let records = build_records(
            Path::new("t.csv"),
            table(&["text"], vec![vec![text("VPN down")]]),
        )
        .unwrap();
        assert_eq!(records, vec![RawRecord::single("VPN down")]);
    }

    #[test]
    fn blank_rows_are_skipped_but_rows_without_text_fail() {
        let rows = vec![
            vec![text("a"), Cell::Int(2)],
            vec![Cell::Empty, Cell::Empty],
            vec![text("  "), Cell::Int(3)],
        ];
        let err = build_records(Path::new("t.xlsx"), table(&["text", "occurrences"], rows))
            .unwrap_err();
        assert!(matches!(err, InputError::MalformedRow { row: 3, .. }));
    }

    #[test]
    fn short_rows_lack_text() {
        let rows = vec![vec![Cell::Int(2)]];
        let err = build_records(Path::new("t.csv"), table(&["occurrences", "text"], rows))
            .unwrap_err();
        assert!(matches!(err, InputError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn numeric_text_cells_become_strings() {
        let rows = vec![vec![Cell::Int(404)]];
        let records = build_records(Path::new("t.xlsx"), table(&["text"], rows)).unwrap();
        assert_eq!(records[0].text, "404");
    }

    #[test]
    fn extension_picks_reader() {
        assert!(is_csv(Path::new("tickets.CSV")));
        assert!(!is_csv(Path::new("tickets.xlsx")));
        assert!(!is_csv(Path::new("tickets")));
    }
}
