//! Cleaning configuration: which columns get which treatment.
//!
//! The configuration is data, not control flow. One generic filler walks
//! the fill rules, the skew and clip stages walk their column lists, and
//! the pruner drops the configured identifier columns. A config file
//! (JSON) can replace the built-in defaults wholesale.

use serde::{Deserialize, Serialize};

/// Strategy used to replace missing values in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    Median,
    Mode,
    Mean,
}

impl FillStrategy {
    pub fn name(self) -> &'static str {
        match self {
            FillStrategy::Median => "median",
            FillStrategy::Mode => "mode",
            FillStrategy::Mean => "mean",
        }
    }
}

/// Binds a fill strategy to a column name. Applied exactly once per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRule {
    pub column: String,
    pub strategy: FillStrategy,
}

impl FillRule {
    pub fn new(column: impl Into<String>, strategy: FillStrategy) -> Self {
        Self {
            column: column.into(),
            strategy,
        }
    }
}

/// Relative order of the skew-transform and outlier-clip stages.
///
/// Clipping bounds are computed from the column distribution at clip
/// time, so the two orders produce different tables. The default runs
/// the log transform first and clips the remaining columns afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageOrder {
    #[default]
    SkewThenClip,
    ClipThenSkew,
}

fn default_log_suffix() -> String {
    "_log".to_string()
}

/// Full cleaning configuration consumed by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Identifier columns dropped up front when present.
    #[serde(default)]
    pub drop_columns: Vec<String>,

    /// Per-column fill strategies. Must cover every column that can hold
    /// missing values; the filler fails loudly on uncovered columns.
    #[serde(default)]
    pub fill: Vec<FillRule>,

    /// Numeric columns receiving the ln(1+v) transform.
    #[serde(default)]
    pub skew_columns: Vec<String>,

    /// Numeric columns clipped to their interquartile bounds.
    #[serde(default)]
    pub clip_columns: Vec<String>,

    /// Suffix appended to skew-transformed column names.
    #[serde(default = "default_log_suffix")]
    pub log_suffix: String,

    /// Relative order of the skew and clip stages.
    #[serde(default)]
    pub stage_order: StageOrder,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            drop_columns: Vec::new(),
            fill: Vec::new(),
            skew_columns: Vec::new(),
            clip_columns: Vec::new(),
            log_suffix: default_log_suffix(),
            stage_order: StageOrder::default(),
        }
    }
}

impl CleaningConfig {
    /// Fill strategy configured for a column, if any.
    pub fn strategy_for(&self, column: &str) -> Option<FillStrategy> {
        self.fill
            .iter()
            .find(|rule| rule.column == column)
            .map(|rule| rule.strategy)
    }
}
