// src/status/activity.rs

use std::fmt;
use std::time::Duration;

/// Idle time at which the child stops counting as `Active`.
pub const QUIET_AFTER: Duration = Duration::from_millis(2_000);
/// Idle time at which the child is reported as `StillRunning`.
pub const STILL_RUNNING_AFTER: Duration = Duration::from_millis(8_000);

/// Qualitative activity of the child, derived from output idle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActivityState {
    /// Output seen within the last 2s.
    Active,
    /// No output for 2s..8s.
    Quiet,
    /// No output for 8s or more.
    StillRunning,
}

impl ActivityState {
    /// Classify an idle duration. Boundaries belong to the higher state.
    pub fn from_idle(idle: Duration) -> Self {
        if idle >= STILL_RUNNING_AFTER {
            ActivityState::StillRunning
        } else if idle >= QUIET_AFTER {
            ActivityState::Quiet
        } else {
            ActivityState::Active
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityState::Active => "active",
            ActivityState::Quiet => "quiet",
            ActivityState::StillRunning => "still running",
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
