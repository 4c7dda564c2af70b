//! CLI argument definitions for the contact formatter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mambo_cli::logging::LogFormat;
use mambo_standards::AliasConflictPolicy;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "mambo",
    version,
    about = "Normalize contact exports into one fixed CSV schema",
    long_about = "Normalize contact-export CSVs from mail clients, phones and social networks \
                  into one fixed 23-column schema.\n\n\
                  Vendor headers are resolved through an editable alias table, full names are \
                  split into prefix/first/middle/last/suffix, phones and emails are cleaned, \
                  and records sharing an email are merged."
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

    /// Allow contact values (names, emails) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a contact export CSV.
    Format(FormatArgs),

    /// List the canonical output fields in column order.
    Fields,

    /// Load and validate the lookup tables.
    Lookups(LookupsArgs),
}

#[derive(Parser)]
pub struct FormatArgs {
    /// Contact export to normalize.
    #[arg(long = "input", short = 'i', value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV path.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "CSV",
        default_value = "formatted_contacts.csv"
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub lookups: LookupsDirArgs,

    /// Label written to the `source` column (default: input file name).
    #[arg(long = "source", value_name = "LABEL")]
    pub source: Option<String>,

    /// Keep every row; do not merge records sharing an email.
    #[arg(long = "no-dedupe")]
    pub no_dedupe: bool,

    /// Title-case first, middle and last names.
    #[arg(long = "title-case-names")]
    pub title_case_names: bool,

    /// Drop losing values of a column collision instead of adding them to notes.
    #[arg(long = "no-collision-notes")]
    pub no_collision_notes: bool,

    /// Run and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct LookupsArgs {
    #[command(flatten)]
    pub lookups: LookupsDirArgs,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LookupsDirArgs {
    /// Lookup tables directory (default: $MAMBO_LOOKUPS_DIR, then the bundled `lookups/`).
    #[arg(long = "lookups", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Override the manifest's policy for an alias mapped to two fields.
    #[arg(long = "alias-conflicts", value_enum)]
    pub alias_conflicts: Option<AliasConflictsArg>,
}

/// CLI alias conflict policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum AliasConflictsArg {
    LastWins,
    FirstWins,
    Reject,
}

impl From<AliasConflictsArg> for AliasConflictPolicy {
    fn from(arg: AliasConflictsArg) -> Self {
        match arg {
            AliasConflictsArg::LastWins => AliasConflictPolicy::LastWins,
            AliasConflictsArg::FirstWins => AliasConflictPolicy::FirstWins,
            AliasConflictsArg::Reject => AliasConflictPolicy::Reject,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
