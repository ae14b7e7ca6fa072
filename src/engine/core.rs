// src/engine/core.rs

//! Pure core monitor state machine.
//!
//! This module contains a synchronous, deterministic "core" that consumes
//! [`MonitorEvent`]s (each stamped with the instant it was observed) and
//! produces:
//! - an updated run state
//! - a list of "commands" describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Runtime`) is responsible for:
//! - spawning the child and reading its pipes
//! - driving the status timer
//! - handling Ctrl+C
//! - writing to the terminal
//!
//! Because events are handled one at a time, the run state needs no locking.

use std::time::Instant;

use crate::engine::event_handlers::{
    CoreStep, handle_aborted, handle_closed, handle_interrupt, handle_output,
    handle_spawn_failed, handle_spawned, handle_tick,
};
use crate::engine::presenter::StatusPresenter;
use crate::engine::{MonitorEvent, RunPhase};
use crate::state::RunState;

/// Pure core monitor state.
///
/// It has **no** channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct CoreMonitor {
    command_line: String,
    phase: RunPhase,
    run: Option<RunState>,
    presenter: StatusPresenter,
}

impl CoreMonitor {
    pub fn new(command_line: impl Into<String>, status_enabled: bool) -> Self {
        Self {
            command_line: command_line.into(),
            phase: RunPhase::Spawning,
            run: None,
            presenter: StatusPresenter::new(status_enabled),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn run_state(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    pub fn presenter(&self) -> &StatusPresenter {
        &self.presenter
    }

    /// Handle a single event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: MonitorEvent, now: Instant) -> CoreStep {
        match event {
            MonitorEvent::Spawned => {
                handle_spawned(&mut self.phase, &mut self.run, &mut self.presenter, now)
            }
            MonitorEvent::SpawnFailed { message } => {
                handle_spawn_failed(&mut self.phase, &mut self.presenter, message)
            }
            MonitorEvent::Output { stream, bytes } => handle_output(
                self.phase,
                &mut self.run,
                &mut self.presenter,
                stream,
                bytes,
                now,
            ),
            MonitorEvent::Tick => handle_tick(self.phase, &self.run, &mut self.presenter, now),
            MonitorEvent::Closed { exit } => handle_closed(
                &mut self.phase,
                &mut self.run,
                &mut self.presenter,
                &self.command_line,
                exit,
                now,
            ),
            MonitorEvent::Interrupted => handle_interrupt(&mut self.phase, &mut self.presenter),
            MonitorEvent::Aborted { reason } => {
                handle_aborted(&mut self.phase, &mut self.presenter, &reason)
            }
        }
    }
}
