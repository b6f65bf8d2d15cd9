//! CLI argument definitions for the category match report.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "category-match-report",
    version,
    about = "Compare operator categories against classifier output",
    long_about = "Compare the Spanish category typed by operators against the English \
                  category emitted by the classifier.\n\n\
                  Reads every CSV export in a folder (and its reports/ subfolder) and \
                  writes an XLSX workbook with a summary sheet and one mismatch sheet \
                  per file."
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
    /// Reconcile every CSV export under a folder and write the report.
    Run(RunArgs),

    /// Print the effective category mapping table.
    Mapping(MappingArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Folder searched for CSV exports (its reports/ subfolder is searched too).
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Report path (default: <ROOT>/category_match_report.xlsx, or .csv with --format csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format to generate.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: ReportFormatArg,

    /// TOML file with [mapping] entries merged over the built-in table.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Field delimiter of the input CSV files.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ';')]
    pub delimiter: char,

    /// Compute and print the summary without writing a report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MappingArgs {
    /// TOML file with [mapping] entries merged over the built-in table.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Xlsx,
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
