// src/state.rs

//! Per-invocation run state shared between the runner and the status line.

use std::time::{Duration, Instant};

/// Timing and completion record for the single wrapped child.
///
/// Invariants:
/// - `last_output >= started` (earlier observations are clamped).
/// - `exit_code` is `Some` iff the run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    started: Instant,
    last_output: Instant,
    exit_code: Option<i32>,
}

impl RunState {
    /// Create the state at the instant the child was spawned.
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            last_output: started,
            exit_code: None,
        }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn last_output(&self) -> Instant {
        self.last_output
    }

    /// Record that output was seen at `at`.
    pub fn observe_output(&mut self, at: Instant) {
        self.last_output = at.max(self.started);
    }

    /// Mark the run finished. Only the first call has any effect.
    pub fn finish(&mut self, exit_code: i32) {
        if self.exit_code.is_none() {
            self.exit_code = Some(exit_code);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.exit_code.is_some()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn idle(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_output)
    }
}
