// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod state;
pub mod status;
pub mod types;

use std::io::{IsTerminal, Write};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::MonitorConfig;
use crate::console::Console;
use crate::engine::Runtime;
use crate::errors::Result;
use crate::exec::CommandSpec;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - command validation (no spawn without a command)
/// - config validation
/// - status line enablement (`--status auto` checks for a terminal)
/// - the runtime loop bound to the real stdout / stderr
///
/// Returns the exit code the process should terminate with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let spec = CommandSpec::from_args(&args.command)?;
    let config = MonitorConfig::try_from(&args)?;
    let status_enabled = config.status_enabled(std::io::stdout().is_terminal());

    debug!(?spec, ?config, status_enabled, "resolved invocation");

    run_with_console(spec, config, status_enabled, Console::stdio()).await
}

/// Same as [`run`] but with explicit inputs and output sinks.
pub async fn run_with_console<O, E>(
    spec: CommandSpec,
    config: MonitorConfig,
    status_enabled: bool,
    console: Console<O, E>,
) -> Result<i32>
where
    O: Write,
    E: Write,
{
    Runtime::new(spec, config, status_enabled, console).run().await
}
