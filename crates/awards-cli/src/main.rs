//! Awards cleaner CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use awards_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use awards_cli::commands::{load_options, run_all, run_clean, run_entities, write_report};
use awards_cli::logging::{LogConfig, LogFormat, init_logging};
use awards_cli::summary::print_summary;
use awards_cli::types::RunResult;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match execute(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn execute(cli: &Cli) -> Result<i32> {
    let options = load_options(
        cli.config.as_deref(),
        cli.strict_booleans,
        cli.keep_extra_columns,
    )?;
    let result = match &cli.command {
        Command::Clean(args) => run_clean(args, &options, cli.dry_run)?,
        Command::Run(args) => run_all(args, &options, cli.dry_run)?,
        Command::Entities => {
            run_entities(&options)?;
            return Ok(0);
        }
    };
    finish(cli, &result)
}

fn finish(cli: &Cli, result: &RunResult) -> Result<i32> {
    print_summary(result);
    if let Some(path) = &cli.report {
        write_report(path, result)?;
    }
    Ok(if result.has_errors() { 1 } else { 0 })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
