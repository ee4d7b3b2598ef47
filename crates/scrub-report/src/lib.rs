//! Diagnostics profile of a table: head rows, per-column kind and
//! missing-value counts. Pure side channel; never affects the pipeline.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as DisplayTable};

use scrub_model::{ColumnKind, Table};

/// Per-column slice of a [`TableProfile`].
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub non_missing: usize,
    pub missing: usize,
}

/// Snapshot of a table's shape taken at one point in the pipeline.
#[derive(Debug, Clone)]
pub struct TableProfile {
    pub row_count: usize,
    pub head_names: Vec<String>,
    pub head_rows: Vec<Vec<String>>,
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Profiles `table`, keeping its first `head` rows for display.
    pub fn of(table: &Table, head: usize) -> Self {
        let head_count = head.min(table.row_count());
        let head_names = table
            .column_names()
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        let head_rows = (0..head_count)
            .map(|row_idx| {
                table
                    .columns()
                    .iter()
                    .map(|column| column.values[row_idx].to_string())
                    .collect()
            })
            .collect();
        let columns = table
            .columns()
            .iter()
            .map(|column| ColumnProfile {
                name: column.name.clone(),
                kind: column.kind,
                non_missing: column.non_missing_count(),
                missing: column.missing_count(),
            })
            .collect();
        Self {
            row_count: table.row_count(),
            head_names,
            head_rows,
            columns,
        }
    }

    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|column| column.missing).sum()
    }

    /// First N rows as a renderable table.
    pub fn head_table(&self) -> DisplayTable {
        let mut table = DisplayTable::new();
        apply_table_style(&mut table);
        let header: Vec<Cell> = self
            .head_names
            .iter()
            .map(|name| header_cell(name))
            .collect();
        table.set_header(header);
        for row in &self.head_rows {
            table.add_row(row.clone());
        }
        table
    }

    /// Per-column kind and missing counts as a renderable table.
    pub fn column_table(&self) -> DisplayTable {
        let mut table = DisplayTable::new();
        apply_table_style(&mut table);
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Kind"),
            header_cell("Non-missing"),
            header_cell("Missing"),
        ]);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        for column in &self.columns {
            table.add_row(vec![
                Cell::new(&column.name),
                Cell::new(column.kind),
                Cell::new(column.non_missing),
                Cell::new(column.missing),
            ]);
        }
        table
    }

    /// Prints the full profile to stdout under a label.
    pub fn print(&self, label: &str) {
        println!(
            "{label}: {} rows x {} columns, {} missing values",
            self.row_count,
            self.columns.len(),
            self.total_missing()
        );
        if !self.head_rows.is_empty() {
            println!("{}", self.head_table());
        }
        println!("{}", self.column_table());
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut DisplayTable, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut DisplayTable) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
