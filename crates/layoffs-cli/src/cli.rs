//! CLI argument definitions for the layoffs cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "layoffs",
    version,
    about = "Clean a raw layoffs export into an analysis-ready table",
    long_about = "Clean a raw layoffs CSV export into an analysis-ready table.\n\n\
                  Removes exact duplicates, trims text, parses dates, canonicalizes\n\
                  missing values and drops records without layoff figures."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the cleaning pipeline and write the cleaned table.
    Clean(CleanArgs),

    /// List the distinct country spellings of a raw export.
    Countries(InputArgs),

    /// Show missing-value counts of a raw export.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw layoffs CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned CSV path (default: layoffs_staging2.csv next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the cleaning rules.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the run report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Run the pipeline and report without writing the cleaned table.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InputArgs {
    /// Raw layoffs CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Raw layoffs CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML file whose `missing_tokens` are counted as missing.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
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
