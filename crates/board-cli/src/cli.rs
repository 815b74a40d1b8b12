//! CLI argument definitions for the ambassador leaderboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ambassador-board",
    version,
    about = "Ambassador leaderboard - rank, search and register campus ambassadors",
    long_about = "Rank campus ambassadors by score from a fetched snapshot.\n\n\
                  Snapshots are JSON arrays as served by the ambassador API, or CSV\n\
                  files with name, email and score columns."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow raw email addresses in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Output shape for command results.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the top of the leaderboard.
    Leaderboard(LeaderboardArgs),

    /// Find ambassadors by name or email and show their rank.
    Search(SearchArgs),

    /// Show the rank of one ambassador by email.
    Rank(RankArgs),

    /// Validate a registration and print the request body.
    Register(RegisterArgs),
}

#[derive(Parser)]
pub struct LeaderboardArgs {
    /// Snapshot file (.json or .csv).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Number of rows to show.
    #[arg(long = "top", value_name = "N", default_value_t = board_model::DEFAULT_TOP_N)]
    pub top: usize,

    /// Show full email addresses instead of masked ones.
    #[arg(long = "show-emails")]
    pub show_emails: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Snapshot file (.json or .csv).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Case-insensitive text to look for in names and emails.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Show full email addresses instead of masked ones.
    #[arg(long = "show-emails")]
    pub show_emails: bool,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Snapshot file (.json or .csv).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Email address of the ambassador.
    #[arg(value_name = "EMAIL")]
    pub email: String,
}

#[derive(Parser)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub email: String,

    /// The email again, to catch typos.
    #[arg(long = "confirm-email")]
    pub confirm_email: String,

    #[arg(long)]
    pub university: String,
}

/// CLI output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
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
