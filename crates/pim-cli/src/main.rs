//! Product import CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use pim_cli::cli::{Cli, Command};
use pim_cli::commands::{run_filter, run_validate};
use pim_cli::logging::{LogConfig, init_logging};
use pim_cli::summary::{print_filter, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let config = log_config(&cli);
    if let Err(error) = init_logging(&config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Validate(args) => {
            match run_validate(args).and_then(|report| {
                print_report(&report, args.format)?;
                Ok(report)
            }) {
                Ok(report) => i32::from(report.has_errors()),
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Filter(args) => match run_filter(args) {
            Ok(report) => {
                print_filter(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn log_config(cli: &Cli) -> LogConfig {
    // An explicit level or -v/-q wins over RUST_LOG.
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let to_terminal = cli.log_file.is_none() && io::stderr().is_terminal();
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => to_terminal,
        },
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
    }
}
