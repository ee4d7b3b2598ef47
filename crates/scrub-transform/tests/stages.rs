//! Tests for the individual cleaning stages.

use scrub_model::{
    CellValue, CleaningConfig, Column, ColumnKind, FillRule, FillStrategy, ScrubError, Table,
};
use scrub_transform::{
    clip_outliers, fill_missing, normalize_text, prune_columns, transform_skewed, verify_outliers,
};

fn numeric(name: &str, values: &[Option<f64>]) -> Column {
    Column::new(
        name,
        ColumnKind::Numeric,
        values
            .iter()
            .map(|value| value.map_or(CellValue::Missing, CellValue::Number))
            .collect(),
    )
}

fn text(name: &str, values: &[Option<&str>]) -> Column {
    Column::new(
        name,
        ColumnKind::Text,
        values
            .iter()
            .map(|value| {
                value.map_or(CellValue::Missing, |value| {
                    CellValue::Text(value.to_string())
                })
            })
            .collect(),
    )
}

fn numbers(table: &Table, name: &str) -> Vec<f64> {
    table.column(name).expect("column").numeric_values()
}

#[test]
fn prune_drops_constant_and_identifier_columns() {
    let mut table = Table::new(vec![
        numeric("Z", &[Some(1.0), Some(1.0), Some(1.0)]),
        numeric("EmployeeNumber", &[Some(10.0), Some(11.0), Some(12.0)]),
        numeric("Age", &[Some(34.0), Some(29.0), Some(41.0)]),
    ]);
    let config = CleaningConfig {
        drop_columns: vec!["EmployeeNumber".to_string(), "Absent".to_string()],
        ..CleaningConfig::default()
    };
    let removed = prune_columns(&mut table, &config);
    assert_eq!(removed, vec!["Z".to_string(), "EmployeeNumber".to_string()]);
    assert_eq!(table.column_names(), vec!["Age"]);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn fill_median_uses_pre_fill_values() {
    let mut table = Table::new(vec![numeric(
        "DistanceFromHome",
        &[Some(1.0), None, Some(100.0)],
    )]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("DistanceFromHome", FillStrategy::Median)],
        ..CleaningConfig::default()
    };
    fill_missing(&mut table, &config).expect("fill");
    assert_eq!(numbers(&table, "DistanceFromHome"), vec![1.0, 50.5, 100.0]);
    assert_eq!(
        table.column("DistanceFromHome").expect("column").missing_count(),
        0
    );
}

#[test]
fn fill_mode_replaces_with_majority_class() {
    let mut table = Table::new(vec![text(
        "OverTime",
        &[Some("Yes"), Some("No"), None, Some("Yes")],
    )]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("OverTime", FillStrategy::Mode)],
        ..CleaningConfig::default()
    };
    fill_missing(&mut table, &config).expect("fill");
    let column = table.column("OverTime").expect("column");
    assert_eq!(column.values[2], CellValue::Text("Yes".to_string()));
    assert_eq!(column.missing_count(), 0);
}

#[test]
fn fill_mean_replaces_with_average() {
    let mut table = Table::new(vec![numeric("V", &[Some(2.0), None, Some(4.0)])]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("V", FillStrategy::Mean)],
        ..CleaningConfig::default()
    };
    fill_missing(&mut table, &config).expect("fill");
    assert_eq!(numbers(&table, "V"), vec![2.0, 3.0, 4.0]);
}

#[test]
fn fill_fails_on_absent_column() {
    let mut table = Table::new(vec![numeric("V", &[Some(1.0)])]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("Absent", FillStrategy::Median)],
        ..CleaningConfig::default()
    };
    let error = fill_missing(&mut table, &config).expect_err("should fail");
    assert!(matches!(error, ScrubError::MissingColumn { name } if name == "Absent"));
}

#[test]
fn fill_fails_on_uncovered_null_column() {
    let mut table = Table::new(vec![
        numeric("Covered", &[Some(1.0), None]),
        numeric("Uncovered", &[Some(1.0), None]),
    ]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("Covered", FillStrategy::Median)],
        ..CleaningConfig::default()
    };
    let error = fill_missing(&mut table, &config).expect_err("should fail");
    assert!(matches!(error, ScrubError::UnconfiguredColumn { name } if name == "Uncovered"));
}

#[test]
fn fill_fails_on_entirely_missing_column() {
    let mut table = Table::new(vec![numeric("V", &[None, None])]);
    let config = CleaningConfig {
        fill: vec![FillRule::new("V", FillStrategy::Median)],
        ..CleaningConfig::default()
    };
    let error = fill_missing(&mut table, &config).expect_err("should fail");
    assert!(matches!(error, ScrubError::UndefinedStatistic { .. }));
}

#[test]
fn skew_renames_and_log_transforms() {
    let mut table = Table::new(vec![numeric(
        "MonthlyIncome",
        &[Some(0.0), Some(1.0), None],
    )]);
    let config = CleaningConfig {
        skew_columns: vec!["MonthlyIncome".to_string(), "Absent".to_string()],
        ..CleaningConfig::default()
    };
    transform_skewed(&mut table, &config).expect("skew");
    assert!(!table.has_column("MonthlyIncome"));
    let column = table.column("MonthlyIncome_log").expect("renamed column");
    assert_eq!(column.values[0], CellValue::Number(0.0));
    assert_eq!(column.values[1], CellValue::Number(2.0_f64.ln()));
    assert_eq!(column.values[2], CellValue::Missing);
}

#[test]
fn skew_fails_outside_log_domain() {
    let mut table = Table::new(vec![numeric("V", &[Some(-1.0)])]);
    let config = CleaningConfig {
        skew_columns: vec!["V".to_string()],
        ..CleaningConfig::default()
    };
    let error = transform_skewed(&mut table, &config).expect_err("should fail");
    assert!(matches!(error, ScrubError::LogDomain { .. }));
}

#[test]
fn clip_clamps_to_pre_clip_bounds() {
    let mut table = Table::new(vec![numeric(
        "DailyRate",
        &[Some(10.0), Some(12.0), Some(11.0), Some(13.0), Some(100.0)],
    )]);
    let config = CleaningConfig {
        clip_columns: vec!["DailyRate".to_string()],
        ..CleaningConfig::default()
    };
    assert!(verify_outliers(table.column("DailyRate").expect("column")).expect("verify"));

    clip_outliers(&mut table, &config).expect("clip");
    // sorted pre-clip values 10,11,12,13,100: Q1=11, Q3=13, whiskers 8..16
    assert_eq!(numbers(&table, "DailyRate"), vec![10.0, 12.0, 11.0, 13.0, 16.0]);
    assert!(!verify_outliers(table.column("DailyRate").expect("column")).expect("verify"));

    // clipping again changes nothing
    let before = numbers(&table, "DailyRate");
    clip_outliers(&mut table, &config).expect("re-clip");
    assert_eq!(numbers(&table, "DailyRate"), before);
}

#[test]
fn clip_fails_on_absent_column() {
    let mut table = Table::new(vec![numeric("V", &[Some(1.0)])]);
    let config = CleaningConfig {
        clip_columns: vec!["Absent".to_string()],
        ..CleaningConfig::default()
    };
    let error = clip_outliers(&mut table, &config).expect_err("should fail");
    assert!(matches!(error, ScrubError::MissingColumn { name } if name == "Absent"));
}

#[test]
fn normalize_text_trims_and_lowercases() {
    let mut table = Table::new(vec![
        text("Department", &[Some("  Sales "), Some("HR"), None]),
        numeric("Age", &[Some(34.0), Some(29.0), None]),
    ]);
    normalize_text(&mut table);
    let department = table.column("Department").expect("column");
    assert_eq!(department.values[0], CellValue::Text("sales".to_string()));
    assert_eq!(department.values[1], CellValue::Text("hr".to_string()));
    assert_eq!(department.values[2], CellValue::Missing);
    // numeric columns are untouched
    assert_eq!(numbers(&table, "Age"), vec![34.0, 29.0]);
}
