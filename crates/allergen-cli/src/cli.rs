//! CLI argument definitions for the allergen normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "allergens",
    version,
    about = "Inspect and exercise the allergen and certainty tables",
    long_about = "Resolve free-form allergen terms and certainty text against the\n\
                  canonical allergen table, and check the tables for conflicts."
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
    /// List the canonical allergen table.
    List(OutputArgs),

    /// Resolve free-form terms to canonical allergens.
    Resolve(ResolveArgs),

    /// Normalize free-form certainty text.
    Certainty(CertaintyArgs),

    /// List alias index keys.
    Aliases(AliasesArgs),

    /// Check the tables for conflicts and report counts.
    Doctor(OutputArgs),
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Terms to resolve.
    #[arg(value_name = "TERM", required = true)]
    pub terms: Vec<String>,

    /// Match display labels only, ignoring aliases.
    #[arg(long = "label-only")]
    pub label_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct CertaintyArgs {
    /// Certainty values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct AliasesArgs {
    /// Only show keys owned by this slug.
    #[arg(long = "slug", value_name = "SLUG")]
    pub slug: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
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
