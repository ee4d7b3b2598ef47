//! Log-scale transform for skewed numeric columns.

use scrub_model::{CellValue, CleaningConfig, ColumnKind, Result, ScrubError, Table};
use tracing::{info, warn};

/// Replaces each value `v` with `ln(1+v)` in every configured column
/// present in the table, then renames the column with the configured
/// suffix; the original name no longer exists afterwards. Configured
/// columns absent from the table are silently skipped.
///
/// # Errors
///
/// [`ScrubError::LogDomain`] when a value is `<= -1`, where `ln(1+v)`
/// is undefined. Column domains are non-negative in practice.
pub fn transform_skewed(table: &mut Table, config: &CleaningConfig) -> Result<()> {
    for name in &config.skew_columns {
        let Some(column) = table.column_mut(name) else {
            warn!(column = %name, "skew column absent, skipping");
            continue;
        };
        if column.kind != ColumnKind::Numeric {
            warn!(column = %name, "skew column is not numeric, skipping");
            continue;
        }
        for value in &mut column.values {
            if let CellValue::Number(v) = value {
                if *v <= -1.0 {
                    return Err(ScrubError::LogDomain {
                        column: name.clone(),
                        value: *v,
                    });
                }
                *v = (1.0 + *v).ln();
            }
        }
        let renamed = format!("{name}{}", config.log_suffix);
        table.rename_column(name, renamed.clone());
        info!(column = %name, renamed = %renamed, "applied log transform");
    }
    Ok(())
}
