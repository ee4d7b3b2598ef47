//! Missing-value replacement driven by configured fill rules.

use scrub_model::{CellValue, CleaningConfig, FillStrategy, Result, ScrubError, Table};
use tracing::info;

use crate::stats;

/// Replaces every missing value in each configured column with the
/// statistic computed over that column's non-missing values at fill
/// time.
///
/// # Errors
///
/// [`ScrubError::MissingColumn`] when a configured column is absent,
/// [`ScrubError::UndefinedStatistic`] when a configured column has no
/// non-missing values, and [`ScrubError::UnconfiguredColumn`] when any
/// column still holds missing values after all rules ran; the fill
/// configuration must cover every null-bearing column.
pub fn fill_missing(table: &mut Table, config: &CleaningConfig) -> Result<()> {
    for rule in &config.fill {
        let column = table
            .column_mut(&rule.column)
            .ok_or_else(|| ScrubError::MissingColumn {
                name: rule.column.clone(),
            })?;
        if column.missing_count() == 0 {
            continue;
        }
        let fill = match rule.strategy {
            FillStrategy::Median => CellValue::Number(stats::median(column)?),
            FillStrategy::Mean => CellValue::Number(stats::mean(column)?),
            FillStrategy::Mode => stats::mode(column)?,
        };
        info!(
            column = %rule.column,
            strategy = rule.strategy.name(),
            value = %fill,
            "filling missing values"
        );
        for value in &mut column.values {
            if value.is_missing() {
                *value = fill.clone();
            }
        }
    }

    for column in table.columns() {
        if column.missing_count() > 0 && config.strategy_for(&column.name).is_none() {
            return Err(ScrubError::UnconfiguredColumn {
                name: column.name.clone(),
            });
        }
    }
    Ok(())
}
