//! CLI argument definitions for the season standings tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "season",
    version,
    about = "Season standings - Aggregate race result tables into season statistics",
    long_about = "Aggregate race result tables (CSV) into season statistics.\n\n\
                  Computes driver and constructor standings, wins, podiums,\n\
                  fastest laps and position gains, resolving renamed drivers\n\
                  and teams through an optional roster document."
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
    /// Aggregate race tables into season standings.
    Standings(StandingsArgs),

    /// Show how a single race table is parsed and what it contributes.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct StandingsArgs {
    /// Race table CSV files or folders of them, in race order.
    ///
    /// A folder contributes its CSV files sorted by file name.
    #[arg(value_name = "TABLE")]
    pub inputs: Vec<PathBuf>,

    /// Roster document (JSON) mapping old names and teams to current ones.
    #[arg(long = "roster", value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Write the JSON result document to this file.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// What to print on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Parse tables one after another instead of in parallel.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Drop rows that have neither a driver nor a team.
    #[arg(long = "skip-blank-rows")]
    pub skip_blank_rows: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Race table CSV file.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Roster document (JSON) used to canonicalize identities.
    #[arg(long = "roster", value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Drop rows that have neither a driver nor a team.
    #[arg(long = "skip-blank-rows")]
    pub skip_blank_rows: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Summary tables.
    Table,
    /// The JSON result document.
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
