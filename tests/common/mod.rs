#![allow(dead_code)]

use std::time::{Duration, Instant};

use procwatch::config::{MonitorConfig, RawMonitorConfig};
use procwatch::exec::CommandSpec;
use procwatch::types::ShellMode;

pub use procwatch_test_utils::{SharedBuffer, init_tracing, with_timeout};

/// A spec that runs `line` through the shell as a single argument.
pub fn shell_spec(line: &str) -> CommandSpec {
    CommandSpec::from_args(&[line]).expect("non-empty command")
}

/// Config with a fast tick so tests see several status frames quickly.
pub fn fast_config(shell: ShellMode) -> MonitorConfig {
    MonitorConfig::try_from(RawMonitorConfig {
        tick_ms: 10,
        shell,
        ..RawMonitorConfig::default()
    })
    .expect("valid config")
}

/// `base + ms`.
pub fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}
