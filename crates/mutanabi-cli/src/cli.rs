//! CLI argument definitions for the poem generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mutanabi_model::{DEFAULT_ENDPOINT, Field};

#[derive(Parser)]
#[command(
    name = "mutanabi",
    version,
    about = "Generate a poem in the style of Al Mutanabi from an Arabic seed word",
    long_about = "Generate a poem in the style of Al Mutanabi from an Arabic seed word.\n\n\
                  The seed word and poem length are validated locally before a single\n\
                  request is sent to the generation service."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the input and request a poem from the generation service.
    Generate(GenerateArgs),

    /// Validate the input without contacting the service.
    Check(CheckArgs),

    /// Show the live clock.
    Clock(ClockArgs),
}

#[derive(Parser)]
pub struct FormArgs {
    /// Arabic seed word.
    #[arg(long = "word", short = 'w', value_name = "WORD", default_value = "")]
    pub word: String,

    /// Poem length; Arabic-Indic digits are accepted (default: 1000).
    #[arg(long = "count", short = 'n', value_name = "N", default_value = "")]
    pub count: String,

    /// Enter the input key by key, dropping characters a field would reject.
    #[arg(long = "typed")]
    pub typed: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Generation endpoint.
    #[arg(long = "endpoint", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (default: wait indefinitely).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show the live clock while waiting for the poem.
    #[arg(long = "clock")]
    pub clock: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Revalidate one field only (word or count), as when it loses focus.
    #[arg(long = "field", value_name = "FIELD")]
    pub field: Option<Field>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: CheckFormatArg,
}

#[derive(Parser)]
pub struct ClockArgs {
    /// Number of ticks to print before exiting.
    #[arg(
        long = "ticks",
        value_name = "N",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub ticks: u32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CheckFormatArg {
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
