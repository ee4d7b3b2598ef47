//! CLI argument definitions for table-scrub.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "table-scrub",
    version,
    about = "Clean a delimited record set: prune, fill, transform, clip, normalize",
    long_about = "Clean a CSV record set in one pass.\n\n\
                  Drops constant and identifier columns, fills missing values with\n\
                  configured statistics, log-transforms skewed numeric columns, clips\n\
                  outliers to interquartile bounds and normalizes text columns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a CSV file and write the cleaned copy.
    Clean(CleanArgs),

    /// Print the active cleaning configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input CSV path.
    #[arg(value_name = "INPUT", default_value = "data.csv")]
    pub input: PathBuf,

    /// Output CSV path (overwritten when present).
    #[arg(value_name = "OUTPUT", default_value = "data_clean.csv")]
    pub output: PathBuf,

    /// JSON cleaning configuration replacing the built-in defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Relative order of the skew-transform and outlier-clip stages.
    #[arg(long = "order", value_enum)]
    pub order: Option<StageOrderArg>,

    /// Number of rows shown in the before/after table profiles.
    #[arg(long = "head", value_name = "N", default_value_t = 5)]
    pub head: usize,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// JSON cleaning configuration replacing the built-in defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI stage order choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StageOrderArg {
    SkewThenClip,
    ClipThenSkew,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
