//! CLI argument definitions for `cq-email`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cq-email",
    version,
    about = "Build the nightly CQ accountability email",
    long_about = "Build the nightly CQ accountability email from a form snapshot.\n\n\
                  Snapshots are JSON documents; pass `-` to read one from stdin.\n\
                  Run `cq-email template` for a blank snapshot to fill in."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Standards TOML overriding the built-in tables (also `CQ_STANDARDS_FILE`).
    #[arg(long = "standards", value_name = "PATH", global = true)]
    pub standards: Option<PathBuf>,

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
    /// Validate a snapshot and print the final email.
    Generate(GenerateArgs),

    /// Validate a snapshot without rendering.
    Check(SnapshotArgs),

    /// Render whatever the snapshot holds, skipping validation.
    Preview(SnapshotArgs),

    /// Look up the MTL responsible for a room.
    Mtl(MtlArgs),

    /// Show the active rank and bay MTL tables.
    Tables,

    /// Print a blank snapshot document.
    Template,
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Snapshot JSON file, or `-` for stdin.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Write the email to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MtlArgs {
    /// Manor name (Winters or Fosters).
    #[arg(value_name = "MANOR")]
    pub manor: String,

    /// Room number as typed, e.g. `c 1-16`.
    #[arg(value_name = "ROOM")]
    pub room: String,
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
