//! Outlier clipping to interquartile bounds.

use scrub_model::{CellValue, CleaningConfig, Column, Result, ScrubError, Table};
use tracing::info;

use crate::stats;

/// Clamps every value of each configured column to the interquartile
/// bounds computed from that column's pre-clip distribution. Logs the
/// out-of-bounds count per column; a zero count skips the rewrite.
///
/// # Errors
///
/// [`ScrubError::MissingColumn`] when a configured column is absent,
/// [`ScrubError::UndefinedStatistic`] when it has no non-missing values.
pub fn clip_outliers(table: &mut Table, config: &CleaningConfig) -> Result<()> {
    for name in &config.clip_columns {
        let column = table
            .column_mut(name)
            .ok_or_else(|| ScrubError::MissingColumn { name: name.clone() })?;
        let bounds = stats::interquartile_bounds(column)?;
        let out_of_bounds = column
            .values
            .iter()
            .filter_map(CellValue::as_number)
            .filter(|value| !bounds.contains(*value))
            .count();
        info!(
            column = %name,
            out_of_bounds,
            lower = bounds.lower,
            upper = bounds.upper,
            "clipping outliers"
        );
        if out_of_bounds == 0 {
            continue;
        }
        for value in &mut column.values {
            if let CellValue::Number(v) = value {
                *v = v.clamp(bounds.lower, bounds.upper);
            }
        }
    }
    Ok(())
}

/// True when the column still has values outside its own interquartile
/// bounds. Diagnostics helper, not part of the pipeline.
pub fn verify_outliers(column: &Column) -> Result<bool> {
    let bounds = stats::interquartile_bounds(column)?;
    let values = column.numeric_values();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(min < bounds.lower || max > bounds.upper)
}
