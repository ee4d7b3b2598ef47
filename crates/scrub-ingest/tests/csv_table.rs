//! Tests for CSV loading, kind inference and persistence.

use std::fs;
use std::path::PathBuf;

use scrub_ingest::{read_table, write_table};
use scrub_model::{CellValue, ColumnKind, ScrubError};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn reads_columns_in_declared_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "B,A,C\n1,x,2\n3,y,4\n");
    let table = read_table(&path).expect("read table");
    assert_eq!(table.column_names(), vec!["B", "A", "C"]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn infers_numeric_and_text_kinds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(
        &dir,
        "data.csv",
        "Age,OverTime,DistanceFromHome\n34,Yes,1\n,No,\n41,Yes,100\n",
    );
    let table = read_table(&path).expect("read table");

    let age = table.column("Age").expect("Age column");
    assert_eq!(age.kind, ColumnKind::Numeric);
    assert_eq!(age.missing_count(), 1);
    assert_eq!(age.numeric_values(), vec![34.0, 41.0]);

    let overtime = table.column("OverTime").expect("OverTime column");
    assert_eq!(overtime.kind, ColumnKind::Text);
    assert_eq!(overtime.values[0], CellValue::Text("Yes".to_string()));
}

#[test]
fn mixed_content_column_is_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "V\n1\nabc\n2\n");
    let table = read_table(&path).expect("read table");
    assert_eq!(table.column("V").expect("V column").kind, ColumnKind::Text);
}

#[test]
fn na_sentinel_and_empty_cells_are_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "V\n1\nNA\n\n3\n");
    let table = read_table(&path).expect("read table");
    let column = table.column("V").expect("V column");
    assert_eq!(column.kind, ColumnKind::Numeric);
    assert_eq!(column.missing_count(), 2);
}

#[test]
fn preserves_raw_text_whitespace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "Dept\n  Sales \nHR\n");
    let table = read_table(&path).expect("read table");
    let column = table.column("Dept").expect("Dept column");
    assert_eq!(column.values[0], CellValue::Text("  Sales ".to_string()));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = read_table(&dir.path().join("absent.csv")).expect_err("should fail");
    assert!(matches!(error, ScrubError::NotFound { .. }));
}

#[test]
fn ragged_rows_are_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "A,B\n1,2\n3\n");
    let error = read_table(&path).expect_err("should fail");
    assert!(matches!(error, ScrubError::Parse { .. }));
}

#[test]
fn duplicate_headers_are_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "A,A\n1,2\n");
    let error = read_table(&path).expect_err("should fail");
    assert!(matches!(error, ScrubError::Parse { .. }));
}

#[test]
fn round_trips_without_index_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "data.csv", "Age,OverTime\n34,Yes\n,No\n41.5,\n");
    let table = read_table(&path).expect("read table");

    let out = dir.path().join("out.csv");
    write_table(&table, &out).expect("write table");
    let written = fs::read_to_string(&out).expect("read written file");
    assert_eq!(written, "Age,OverTime\n34,Yes\n,No\n41.5,\n");

    let round = read_table(&out).expect("re-read table");
    assert_eq!(round.column_names(), table.column_names());
    assert_eq!(round.row_count(), table.row_count());
}
