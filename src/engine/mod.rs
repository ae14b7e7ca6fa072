// src/engine/mod.rs

//! Monitoring engine for procwatch.
//!
//! This module ties together:
//! - the run state machine (`spawning -> running -> finished | failed | interrupted`)
//! - the status presenter that owns the overwritten status line
//! - the runtime event loop that reacts to:
//!   - status ticks
//!   - stdout / stderr chunks
//!   - child exit
//!   - Ctrl-C
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::time::Duration;

use crate::exec::ChildExit;
use crate::types::StreamKind;

/// Exit code used when the run is cut short by Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Lifecycle phase of the single wrapped child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Spawning,
    Running,
    Finished,
    Failed,
    Interrupted,
}

impl RunPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunPhase::Finished | RunPhase::Failed | RunPhase::Interrupted
        )
    }
}

/// Events flowing into the core from the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The OS accepted the command.
    Spawned,
    /// The OS could not start the command.
    SpawnFailed { message: String },
    /// A chunk was read from one of the child's output streams.
    Output { stream: StreamKind, bytes: Vec<u8> },
    /// The status timer fired.
    Tick,
    /// The child exited and both output streams reached EOF.
    Closed { exit: ChildExit },
    /// Ctrl-C was received.
    Interrupted,
    /// Waiting on the child or writing to the terminal failed.
    Aborted { reason: String },
}

/// Timing report printed once the child has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub elapsed: Duration,
    pub exit_code: i32,
}

impl Summary {
    pub fn lines(&self) -> [String; 2] {
        [
            format!("Completed in {:.1}s", self.elapsed.as_secs_f64()),
            format!("Exit code: {}", self.exit_code),
        ]
    }
}

pub mod core;
pub mod event_handlers;
pub mod presenter;
pub mod runtime;

pub use self::core::CoreMonitor;
pub use event_handlers::{CoreCommand, CoreStep};
pub use presenter::StatusPresenter;
pub use runtime::Runtime;
