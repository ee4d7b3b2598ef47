//! Text column normalization.

use scrub_model::{CellValue, ColumnKind, Table};
use tracing::debug;

/// Trims leading/trailing whitespace and lowercases every non-missing
/// value of every text column. Missing values stay missing. Idempotent.
pub fn normalize_text(table: &mut Table) {
    for column in table.columns_mut() {
        if column.kind != ColumnKind::Text {
            continue;
        }
        let mut changed = 0usize;
        for value in &mut column.values {
            if let CellValue::Text(text) = value {
                let normalized = text.trim().to_lowercase();
                if *text != normalized {
                    *text = normalized;
                    changed += 1;
                }
            }
        }
        debug!(column = %column.name, changed, "normalized text column");
    }
}
