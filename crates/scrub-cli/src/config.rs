//! Built-in cleaning configuration and config-file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use scrub_model::{CleaningConfig, FillRule, FillStrategy};

/// Built-in defaults for the employee attrition extract this tool ships
/// against: the record id column is dropped, every null-bearing column
/// has a fill strategy, income/tenure columns get the log transform and
/// the rate-like columns get IQR clipping.
pub fn default_config() -> CleaningConfig {
    let strings = |names: &[&str]| names.iter().map(|name| (*name).to_string()).collect();
    CleaningConfig {
        drop_columns: strings(&["EmployeeNumber"]),
        fill: vec![
            FillRule::new("DistanceFromHome", FillStrategy::Median),
            FillRule::new("NumCompaniesWorked", FillStrategy::Median),
            FillRule::new("TotalWorkingYears", FillStrategy::Median),
            FillRule::new("MonthlyIncome", FillStrategy::Median),
            FillRule::new("JobSatisfaction", FillStrategy::Mode),
            FillRule::new("OverTime", FillStrategy::Mode),
            FillRule::new("BusinessTravel", FillStrategy::Mode),
            FillRule::new("MaritalStatus", FillStrategy::Mode),
        ],
        skew_columns: strings(&[
            "MonthlyIncome",
            "TotalWorkingYears",
            "YearsAtCompany",
            "YearsInCurrentRole",
            "YearsSinceLastPromotion",
        ]),
        clip_columns: strings(&[
            "Age",
            "DailyRate",
            "DistanceFromHome",
            "HourlyRate",
            "MonthlyRate",
            "NumCompaniesWorked",
            "PercentSalaryHike",
        ]),
        ..CleaningConfig::default()
    }
}

/// Loads the cleaning configuration, falling back to the built-in
/// defaults when no path is given. A config file replaces the defaults
/// wholesale.
pub fn load_config(path: Option<&Path>) -> Result<CleaningConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: CleaningConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}
