//! CLI argument definitions for the CWR toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cwr_model::CwrVersion;

#[derive(Parser)]
#[command(
    name = "cwr",
    version,
    about = "CWR toolkit - generate registration files and parse society acknowledgements",
    long_about = "Generate Common Works Registration (CWR) files from a JSON catalog\n\
                  and decode the acknowledgement (ACK) files collection societies\n\
                  send back.\n\n\
                  Supports the CWR 2.1, 2.2, 3.0 and 3.1 wire layouts."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a CWR registration file from a JSON catalog.
    Generate(GenerateArgs),

    /// Parse a society acknowledgement (ACK) file.
    Ack(AckArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON catalog with works and submission parameters.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Output directory for the generated file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override the CWR version declared in the catalog.
    #[arg(long = "cwr-version", value_enum)]
    pub cwr_version: Option<CwrVersionArg>,

    /// Validate and report without writing the file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Report format to print on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct AckArgs {
    /// Acknowledgement file to decode.
    #[arg(value_name = "ACKFILE")]
    pub ack_file: PathBuf,

    /// Report format to print on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

/// CWR version choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CwrVersionArg {
    #[value(name = "2.1")]
    V21,
    #[value(name = "2.2")]
    V22,
    #[value(name = "3.0")]
    V30,
    #[value(name = "3.1")]
    V31,
}

impl From<CwrVersionArg> for CwrVersion {
    fn from(value: CwrVersionArg) -> Self {
        match value {
            CwrVersionArg::V21 => CwrVersion::V21,
            CwrVersionArg::V22 => CwrVersion::V22,
            CwrVersionArg::V30 => CwrVersion::V30,
            CwrVersionArg::V31 => CwrVersion::V31,
        }
    }
}

/// Report output choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
