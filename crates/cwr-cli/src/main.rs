//! CWR toolkit CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use cwr_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_ack, run_generate};
use crate::summary::{print_ack, print_generation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Generate(args) => match run_generate(args) {
            Ok(outcome) => {
                if args.format == ReportFormatArg::Json {
                    print_json(&outcome);
                } else {
                    print_generation(&outcome);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Ack(args) => match run_ack(args) {
            Ok(summary) => {
                if args.format == ReportFormatArg::Json {
                    print_json(&summary);
                } else {
                    print_ack(&summary);
                }
                // A file where nothing decoded is indistinguishable from
                // pointing at the wrong file.
                if summary.records.is_empty() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: serialize report: {error}"),
    }
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
