//! CSV persistence for cleaned tables.

use std::path::Path;

use tracing::debug;

use scrub_model::{Result, ScrubError, Table};

/// Writes the table as UTF-8 CSV in column order, overwriting `path`.
///
/// Missing values are written as empty cells; no row-index column is
/// emitted.
///
/// # Errors
///
/// [`ScrubError::Write`] on any I/O failure.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ScrubError::Write {
        path: path.to_path_buf(),
        source,
    };
    let into_io = |error: csv::Error| match error.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => std::io::Error::other(format!("{other:?}")),
    };

    let mut writer = csv::Writer::from_path(path).map_err(|error| write_error(into_io(error)))?;
    writer
        .write_record(table.column_names())
        .map_err(|error| write_error(into_io(error)))?;
    for row_idx in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.values[row_idx].to_string())
            .collect();
        writer
            .write_record(&record)
            .map_err(|error| write_error(into_io(error)))?;
    }
    writer.flush().map_err(write_error)?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote csv table");
    Ok(())
}
