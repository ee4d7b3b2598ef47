//! The cleaning pipeline with explicit stages.
//!
//! Stages run in a fixed order over a copy of the input table:
//! 1. **prune**: drop constant and identifier columns
//! 2. **fill**: replace missing values per configured strategy
//! 3. **skew** / **clip**: log transform and IQR clipping, in the
//!    configured relative order
//! 4. **text**: trim and lowercase text columns
//!
//! There is no retry logic; the first stage error aborts the run.

use scrub_model::{CleaningConfig, Result, StageOrder, Table};
use tracing::{info, info_span};

use crate::clip::clip_outliers;
use crate::fill::fill_missing;
use crate::prune::prune_columns;
use crate::skew::transform_skewed;
use crate::text::normalize_text;

pub struct CleaningPipeline {
    config: CleaningConfig,
}

impl CleaningPipeline {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Runs every cleaning stage over a copy of `table` and returns the
    /// cleaned copy. The input table is left untouched.
    pub fn run(&self, table: &Table) -> Result<Table> {
        let mut cleaned = table.clone();

        info_span!("prune").in_scope(|| {
            prune_columns(&mut cleaned, &self.config);
        });
        info_span!("fill").in_scope(|| fill_missing(&mut cleaned, &self.config))?;
        match self.config.stage_order {
            StageOrder::SkewThenClip => {
                info_span!("skew").in_scope(|| transform_skewed(&mut cleaned, &self.config))?;
                info_span!("clip").in_scope(|| clip_outliers(&mut cleaned, &self.config))?;
            }
            StageOrder::ClipThenSkew => {
                info_span!("clip").in_scope(|| clip_outliers(&mut cleaned, &self.config))?;
                info_span!("skew").in_scope(|| transform_skewed(&mut cleaned, &self.config))?;
            }
        }
        info_span!("normalize_text").in_scope(|| normalize_text(&mut cleaned));

        info!(
            columns = cleaned.columns().len(),
            rows = cleaned.row_count(),
            "cleaning complete"
        );
        Ok(cleaned)
    }
}
