//! Ambassador leaderboard CLI.

use board_cli::logging::{LogConfig, LogFormat, init_logging};
use board_cli::render::OutputFormat;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::{run_leaderboard, run_rank, run_register, run_search};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let format = match cli.format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let styled = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    let result = match &cli.command {
        Command::Leaderboard(args) => run_leaderboard(args, format, styled),
        Command::Search(args) => run_search(args, format, styled),
        Command::Rank(args) => run_rank(args, format),
        Command::Register(args) => run_register(args),
    };
    let exit_code = match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}
