// src/config/model.rs

use std::time::Duration;

use crate::cli::{CliArgs, StatusMode};
use crate::types::ShellMode;

/// Default status line refresh interval.
pub const DEFAULT_TICK_MS: u64 = 120;

/// Unvalidated configuration, a direct mapping of the CLI flags.
///
/// Convert into [`MonitorConfig`] with `TryFrom`, which runs validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMonitorConfig {
    pub tick_ms: u64,
    pub status: StatusMode,
    pub shell: ShellMode,
}

impl Default for RawMonitorConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            status: StatusMode::Auto,
            shell: ShellMode::default(),
        }
    }
}

impl From<&CliArgs> for RawMonitorConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            tick_ms: args.tick_ms,
            status: args.status,
            shell: if args.no_shell {
                ShellMode::Direct
            } else {
                ShellMode::Shell
            },
        }
    }
}

/// Validated monitor configuration.
///
/// Fields are private to force construction through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    tick_interval: Duration,
    status: StatusMode,
    shell: ShellMode,
}

impl MonitorConfig {
    /// Internal constructor used by validation.
    pub(crate) fn new_unchecked(raw: RawMonitorConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(raw.tick_ms),
            status: raw.status,
            shell: raw.shell,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn status(&self) -> StatusMode {
        self.status
    }

    pub fn shell(&self) -> ShellMode {
        self.shell
    }

    /// Resolve `StatusMode::Auto` against whether stdout is a terminal.
    pub fn status_enabled(&self, stdout_is_terminal: bool) -> bool {
        match self.status {
            StatusMode::Auto => stdout_is_terminal,
            StatusMode::Always => true,
            StatusMode::Never => false,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new_unchecked(RawMonitorConfig::default())
    }
}
