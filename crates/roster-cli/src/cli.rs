//! CLI argument definitions for the roster tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{AttendanceFilter, ScoreVariant};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Rank students, look them up, and review attendance from a CSV roster",
    long_about = "Rank students from a CSV roster by a weighted composite score.\n\n\
                  Scores are min-max normalized per attribute, weighted, and rescaled\n\
                  onto a fixed display band. Attendance is classified as detained,\n\
                  condonation, or clear."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file (defaults apply to every key it omits).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Score band; overrides `scoring.upper_bound` from the config file.
    #[arg(long = "band", value_enum, global = true)]
    pub band: Option<BandArg>,

    /// Output format for results.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

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

    /// Allow student identifiers and names to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank the roster and show the best students.
    Rank(RankArgs),

    /// Show the details of one student.
    Lookup(LookupArgs),

    /// Classify students by attendance.
    Attendance(AttendanceArgs),

    /// Show the first rows of the loaded roster.
    Preview(PreviewArgs),

    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Number of students to show; must be one of `display.top_choices`.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Student identifier to look up.
    #[arg(value_name = "ID")]
    pub student_id: String,
}

#[derive(Parser)]
pub struct AttendanceArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Which students to list.
    #[arg(long = "filter", value_enum, default_value = "all")]
    pub filter: FilterArg,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Number of rows to show.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

/// CLI score band choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum BandArg {
    /// Upper bound 9.8.
    Aware,
    /// Upper bound 9.6.
    Decoupled,
}

impl From<BandArg> for ScoreVariant {
    fn from(value: BandArg) -> Self {
        match value {
            BandArg::Aware => ScoreVariant::AttendanceAware,
            BandArg::Decoupled => ScoreVariant::Decoupled,
        }
    }
}

/// CLI attendance filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Detained,
    Condonation,
    Clear,
}

impl From<FilterArg> for AttendanceFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => AttendanceFilter::All,
            FilterArg::Detained => AttendanceFilter::Detained,
            FilterArg::Condonation => AttendanceFilter::Condonation,
            FilterArg::Clear => AttendanceFilter::Clear,
        }
    }
}

/// CLI result format choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
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
