//! Drops columns that carry no information.

use scrub_model::{CleaningConfig, Table};
use tracing::info;

/// Removes every column whose distinct non-missing value set has at most
/// one element, then each configured identifier column that is present.
/// Absent configured columns are silently skipped. Returns the removed
/// names in removal order.
pub fn prune_columns(table: &mut Table, config: &CleaningConfig) -> Vec<String> {
    let mut removed = Vec::new();

    let constant: Vec<String> = table
        .columns()
        .iter()
        .filter(|column| column.is_constant())
        .map(|column| column.name.clone())
        .collect();
    for name in constant {
        table.drop_column(&name);
        info!(column = %name, "dropped constant column");
        removed.push(name);
    }

    for name in &config.drop_columns {
        if table.drop_column(name) {
            info!(column = %name, "dropped identifier column");
            removed.push(name.clone());
        }
    }

    removed
}
