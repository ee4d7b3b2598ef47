//! Table cleaning stages and the pipeline that orders them.
//!
//! - **stats**: column statistics (median, mode, mean, quartiles, IQR bounds)
//! - **prune**: drops constant-valued and configured identifier columns
//! - **fill**: replaces missing values per configured strategy
//! - **skew**: ln(1+v) transform for skewed numeric columns
//! - **clip**: clamps numeric columns to their interquartile bounds
//! - **text**: trims and lowercases text columns
//! - **pipeline**: runs the stages in order over a copy of the table

pub mod clip;
pub mod fill;
pub mod pipeline;
pub mod prune;
pub mod skew;
pub mod stats;
pub mod text;

pub use clip::{clip_outliers, verify_outliers};
pub use fill::fill_missing;
pub use pipeline::CleaningPipeline;
pub use prune::prune_columns;
pub use skew::transform_skewed;
pub use stats::{InterquartileBounds, interquartile_bounds, mean, median, mode, quartiles};
pub use text::normalize_text;
