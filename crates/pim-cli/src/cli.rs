//! CLI argument definitions for the product import tool.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pim_filter::BooleanChoice;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "pim-import",
    version,
    about = "Validate and filter product import files",
    long_about = "Validate product import CSV files against an attribute catalog.\n\n\
                  Constraints are guessed from attribute definitions; violations are\n\
                  reported per row and column."
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
    /// Validate every row of a product file.
    Validate(ValidateArgs),

    /// List products whose boolean attribute matches a yes/no choice.
    Filter(FilterArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Attribute definition CSV.
    #[arg(long = "attributes", value_name = "PATH")]
    pub attributes: PathBuf,

    /// Product CSV to validate.
    #[arg(long = "products", value_name = "PATH")]
    pub products: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Attribute definition CSV.
    #[arg(long = "attributes", value_name = "PATH")]
    pub attributes: PathBuf,

    /// Product CSV to filter.
    #[arg(long = "products", value_name = "PATH")]
    pub products: PathBuf,

    /// Code of a boolean attribute.
    #[arg(long = "attribute", value_name = "CODE")]
    pub attribute: String,

    /// Selected choice (yes or no).
    #[arg(long = "choice", value_name = "CHOICE", value_parser = BooleanChoice::from_str)]
    pub choice: BooleanChoice,
}

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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
