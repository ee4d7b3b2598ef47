//! CSV loading with per-column kind inference.
//!
//! A column is numeric when it has at least one non-missing cell and
//! every non-missing cell parses as `f64`; everything else is text.
//! Empty cells and the `NA` sentinel are missing. Raw text content is
//! preserved as-is so downstream normalization operates on what the
//! source actually held.

use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use scrub_model::{CellValue, Column, ColumnKind, Result, ScrubError, Table};

const MISSING_SENTINEL: &str = "NA";

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == MISSING_SENTINEL
}

/// Parses a raw CSV cell into a cell value for a column of the given kind.
pub fn parse_cell(raw: &str, kind: ColumnKind) -> CellValue {
    if is_missing(raw) {
        return CellValue::Missing;
    }
    match kind {
        ColumnKind::Numeric => match raw.trim().parse::<f64>() {
            Ok(value) => CellValue::Number(value),
            Err(_) => CellValue::Text(raw.to_string()),
        },
        ColumnKind::Text => CellValue::Text(raw.to_string()),
    }
}

/// Loads a CSV file into a [`Table`], preserving declared column order.
///
/// # Errors
///
/// [`ScrubError::NotFound`] when the path does not exist,
/// [`ScrubError::Parse`] on malformed content (ragged rows, duplicate
/// headers, unreadable records).
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ScrubError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let parse_error = |message: String| ScrubError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| parse_error(error.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| parse_error(error.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(parse_error(format!("duplicate column name '{header}'")));
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| parse_error(error.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (col_idx, header) in headers.iter().enumerate() {
        let mut non_missing = 0usize;
        let mut numeric = 0usize;
        for row in &rows {
            let cell = row.get(col_idx).map_or("", String::as_str);
            if is_missing(cell) {
                continue;
            }
            non_missing += 1;
            if cell.trim().parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let kind = if non_missing > 0 && numeric == non_missing {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        };
        let values = rows
            .iter()
            .map(|row| parse_cell(row.get(col_idx).map_or("", String::as_str), kind))
            .collect();
        columns.push(Column::new(header.clone(), kind, values));
    }

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "loaded csv table"
    );
    Ok(Table::new(columns))
}
