// src/config/validate.rs

use crate::cli::CliArgs;
use crate::config::model::{MonitorConfig, RawMonitorConfig};
use crate::errors::{ProcwatchError, Result};

/// Smallest accepted tick interval; anything faster floods the terminal.
pub const MIN_TICK_MS: u64 = 10;
/// Largest accepted tick interval.
pub const MAX_TICK_MS: u64 = 10_000;

impl TryFrom<RawMonitorConfig> for MonitorConfig {
    type Error = ProcwatchError;

    fn try_from(raw: RawMonitorConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(MonitorConfig::new_unchecked(raw))
    }
}

impl TryFrom<&CliArgs> for MonitorConfig {
    type Error = ProcwatchError;

    fn try_from(args: &CliArgs) -> std::result::Result<Self, Self::Error> {
        MonitorConfig::try_from(RawMonitorConfig::from(args))
    }
}

fn validate_raw_config(cfg: &RawMonitorConfig) -> Result<()> {
    validate_tick(cfg.tick_ms)?;
    Ok(())
}

fn validate_tick(tick_ms: u64) -> Result<()> {
    if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&tick_ms) {
        return Err(ProcwatchError::Config(format!(
            "--tick-ms must be between {MIN_TICK_MS} and {MAX_TICK_MS} (got {tick_ms})"
        )));
    }
    Ok(())
}
