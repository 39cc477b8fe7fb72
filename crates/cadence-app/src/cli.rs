//! Command-line arguments for the `cadence` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "cadence",
    version,
    about = "Generate recurring study protocol events from a schedule request"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./cadence.toml if present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the events for a request and print a preview.
    Preview(PreviewArgs),
}

#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// JSON schedule request.
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Preview output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Confirm the schedule and emit submission rows as JSON lines.
    #[arg(long = "confirm")]
    pub confirm: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
