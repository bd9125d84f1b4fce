//! CLI argument definitions for the awards cleaner.

use std::path::PathBuf;

use awards_model::Entity;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "awards-clean",
    version,
    about = "Clean scraped awards tables for database loading",
    long_about = "Clean scraped awards-ceremony tables (persons, movies, credits, \
                  nominations, countries, production companies) into \
                  deduplicated, default-filled CSV files ready for loading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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

    /// TOML file with sentinel defaults, boolean mode and natural key overrides.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Fail on boolean tokens other than true/false, 1/0, yes/no.
    #[arg(long = "strict-booleans", global = true)]
    pub strict_booleans: bool,

    /// Append unrecognized source columns after the canonical ones.
    #[arg(long = "keep-extra-columns", global = true)]
    pub keep_extra_columns: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH", global = true)]
    pub report: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a single entity table.
    Clean(CleanArgs),

    /// Clean every entity table found in a directory.
    Run(RunArgs),

    /// List entities with their output columns and natural keys.
    Entities,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Entity of the input table (e.g. Person, movie, final_academy_nomination).
    #[arg(value_name = "ENTITY")]
    pub entity: Entity,

    /// Scraped CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT stem>_clean.csv beside the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory holding the scraper's CSV files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for clean files (default: INPUT_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
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
