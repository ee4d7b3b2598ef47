//! Error types for table loading, cleaning and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, cleaning or persisting a table.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Malformed delimited content.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A cleaning stage referenced a column absent from the table.
    #[error("column not found: {name}")]
    MissingColumn { name: String },

    /// A column still holds missing values but no fill strategy covers it.
    #[error("column '{name}' has missing values but no configured fill strategy")]
    UnconfiguredColumn { name: String },

    /// Statistic requested over a column with no non-missing values.
    #[error("statistic '{statistic}' undefined for column '{column}': no non-missing values")]
    UndefinedStatistic {
        column: String,
        statistic: &'static str,
    },

    /// Log transform applied to a value outside its domain (v <= -1).
    #[error("log transform undefined for value {value} in column '{column}'")]
    LogDomain { column: String, value: f64 },

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScrubError>;
