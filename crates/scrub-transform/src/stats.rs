//! Column statistics over non-missing values.

use scrub_model::{CellValue, Column, Result, ScrubError};

/// Whisker bounds derived from a column's quartiles. Recomputed fresh
/// for each column, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterquartileBounds {
    pub lower: f64,
    pub upper: f64,
}

impl InterquartileBounds {
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

fn undefined(column: &Column, statistic: &'static str) -> ScrubError {
    ScrubError::UndefinedStatistic {
        column: column.name.clone(),
        statistic,
    }
}

fn sorted_numeric(column: &Column) -> Vec<f64> {
    let mut values = column.numeric_values();
    values.sort_by(f64::total_cmp);
    values
}

/// Middle value of the sorted non-missing numeric values; mean of the
/// two middles on even counts.
pub fn median(column: &Column) -> Result<f64> {
    let sorted = sorted_numeric(column);
    if sorted.is_empty() {
        return Err(undefined(column, "median"));
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Arithmetic mean of the non-missing numeric values.
pub fn mean(column: &Column) -> Result<f64> {
    let values = column.numeric_values();
    if values.is_empty() {
        return Err(undefined(column, "mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Most frequent non-missing value; ties go to the value encountered
/// first in row order. Works for numeric and text columns alike.
pub fn mode(column: &Column) -> Result<CellValue> {
    let mut counts: Vec<(&CellValue, usize)> = Vec::new();
    for value in column.non_missing() {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    // counts is in first-encounter order; strict comparison keeps the
    // earliest value on ties
    let mut best: Option<(&CellValue, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    match best {
        Some((value, _)) => Ok(value.clone()),
        None => Err(undefined(column, "mode")),
    }
}

/// (Q1, Q3) via linear interpolation at the 25th and 75th percentile.
pub fn quartiles(column: &Column) -> Result<(f64, f64)> {
    let sorted = sorted_numeric(column);
    if sorted.is_empty() {
        return Err(undefined(column, "quartiles"));
    }
    Ok((percentile(&sorted, 0.25), percentile(&sorted, 0.75)))
}

fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q * (sorted.len() as f64 - 1.0);
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let a = sorted[idx];
    let b = sorted[(idx + 1).min(sorted.len() - 1)];
    a + (b - a) * frac
}

/// `(Q1 - 1.5*IQR, Q3 + 1.5*IQR)` over the non-missing numeric values.
pub fn interquartile_bounds(column: &Column) -> Result<InterquartileBounds> {
    let (q1, q3) = quartiles(column)?;
    let iqr = q3 - q1;
    Ok(InterquartileBounds {
        lower: q1 - 1.5 * iqr,
        upper: q3 + 1.5 * iqr,
    })
}
