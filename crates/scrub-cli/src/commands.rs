//! Command implementations.

use anyhow::Result;
use tracing::{error, info, info_span};

use scrub_cli::config::load_config;
use scrub_ingest::{read_table, write_table};
use scrub_model::StageOrder;
use scrub_report::TableProfile;
use scrub_transform::CleaningPipeline;

use crate::cli::{CleanArgs, ConfigArgs, StageOrderArg};

/// Load, clean and persist one table. Returns the process exit code.
///
/// Loader failures are caught here: the error is logged, the pipeline is
/// skipped and the exit code is non-zero. Persist failures are also
/// caught so the cleaned-table profile is still reported from memory.
/// Pipeline stage failures propagate and abort the run.
pub fn run_clean(args: &CleanArgs) -> Result<i32> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(order) = args.order {
        config.stage_order = match order {
            StageOrderArg::SkewThenClip => StageOrder::SkewThenClip,
            StageOrderArg::ClipThenSkew => StageOrder::ClipThenSkew,
        };
    }

    let load_span = info_span!("load", input = %args.input.display());
    let table = match load_span.in_scope(|| read_table(&args.input)) {
        Ok(table) => table,
        Err(error) => {
            error!(%error, "failed to load input, skipping pipeline");
            return Ok(1);
        }
    };
    info!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "loaded input"
    );
    TableProfile::of(&table, args.head).print("raw table");

    let cleaned = CleaningPipeline::new(config).run(&table)?;
    let profile = TableProfile::of(&cleaned, args.head);

    let persist_span = info_span!("persist", output = %args.output.display());
    let exit_code = match persist_span.in_scope(|| write_table(&cleaned, &args.output)) {
        Ok(()) => {
            info!(output = %args.output.display(), "wrote cleaned table");
            0
        }
        Err(error) => {
            error!(%error, "failed to persist cleaned table");
            1
        }
    };
    profile.print("cleaned table");
    Ok(exit_code)
}

/// Print the active cleaning configuration as JSON.
pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
