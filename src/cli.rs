// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Everything after the first positional argument belongs to the wrapped
//! command and is passed through untouched, including values that look like
//! flags (`procwatch ls -la`). Use `--` to be explicit.

use clap::{Parser, ValueEnum};

use crate::config::model::DEFAULT_TICK_MS;

/// Command-line arguments for `procwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "procwatch",
    version,
    about = "Run a command, forward its output and show a live status line.",
    long_about = None
)]
pub struct CliArgs {
    /// Status line refresh interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// When to draw the status line.
    ///
    /// `auto` draws it only when stdout is a terminal.
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = StatusMode::Auto)]
    pub status: StatusMode,

    /// Spawn the executable directly instead of through the platform shell.
    #[arg(long)]
    pub no_shell: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROCWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, followed by its arguments.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Whether the status line is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusMode {
    /// Draw only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
