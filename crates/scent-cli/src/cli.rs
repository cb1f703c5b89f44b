//! CLI argument definitions for the standings tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use scent_ingest::TimeFraction;
use scent_model::Level;

#[derive(Parser)]
#[command(
    name = "scent-standings",
    version,
    about = "Scent-work tournament scoring and standings",
    long_about = "Score scent-work competition rounds and build standings.\n\n\
                  Ranks each search, awards tournament points for the competition level,\n\
                  and aggregates rounds into season and round standings."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank one round's searches and award tournament points.
    Results(ResultsArgs),

    /// Season standings over each team's best searches.
    Season(StandingsArgs),

    /// Standings over each team's best round totals.
    Rounds(StandingsArgs),
}

/// Options shared by every command.
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Competition level (A, B, NW1 or NW2). Overrides the config file.
    #[arg(long = "level", value_name = "LEVEL")]
    pub level: Option<Level>,

    /// Competition settings file (TOML).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ResultsArgs {
    /// Search sheet of one round (CSV).
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// How the digits after the decimal point of a time are read.
    #[arg(long = "time-fraction", value_enum)]
    pub time_fraction: Option<TimeFractionArg>,

    /// Also write the round's tournament points as a points sheet.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StandingsArgs {
    /// Folder holding the level's points sheets.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// File-name prefix of the points sheets (default: NW1 or NW2 by level).
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Number of entries counted per team (default: 12/9 searches, 3 rounds).
    #[arg(long = "keep", value_name = "K")]
    pub keep: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimeFractionArg {
    /// `.5` is half a second.
    Hundredths,
    /// Digits are milliseconds, as older reports read them.
    Raw,
}

impl From<TimeFractionArg> for TimeFraction {
    fn from(value: TimeFractionArg) -> Self {
        match value {
            TimeFractionArg::Hundredths => TimeFraction::Hundredths,
            TimeFractionArg::Raw => TimeFraction::Raw,
        }
    }
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
