//! CLI argument definitions for the dimension lookup tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use energy_model::DimensionKind;

#[derive(Parser)]
#[command(
    name = "energy-dimensions",
    version,
    about = "Parse vendor strings into standardized energy dimensions",
    long_about = "Parse free-form vendor strings into standardized energy dimensions.\n\n\
                  Kinds: account-class, account-status, commodity, plan-type,\n\
                  rate-type, unit-of-measure. Unknown spellings resolve to Unrecognized."
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

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log events.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include raw vendor input in log events instead of a redaction marker.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse one or more values as the given dimension kind.
    Parse(ParseArgs),

    /// List the standardized values of a dimension kind.
    List(ListArgs),

    /// List the supported dimension kinds.
    Kinds(KindsArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Dimension kind (e.g. account-class, unit-of-measure).
    #[arg(value_name = "KIND")]
    pub kind: DimensionKind,

    /// Vendor strings to parse.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Exit with status 1 when any value is unrecognized.
    #[arg(long = "fail-on-unrecognized")]
    pub fail_on_unrecognized: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Dimension kind (e.g. account-class, unit-of-measure).
    #[arg(value_name = "KIND")]
    pub kind: DimensionKind,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct KindsArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

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
