// src/engine/presenter.rs

//! Status line presenter.
//!
//! Owns the single overwritten status line and the bookkeeping needed to
//! keep it from colliding with forwarded output:
//! - `drawn`: a status line is currently visible (no trailing newline).
//! - `at_line_start`: the last forwarded chunk ended with a newline, so the
//!   cursor sits at the start of an empty line.
//!
//! The presenter never touches the terminal; it returns [`CoreCommand`]s.

use std::time::Instant;

use crate::engine::CoreCommand;
use crate::state::RunState;
use crate::status::{Spinner, StatusFrame};

#[derive(Debug, Clone)]
pub struct StatusPresenter {
    enabled: bool,
    ticking: bool,
    drawn: bool,
    at_line_start: bool,
    spinner: Spinner,
}

impl StatusPresenter {
    /// A disabled presenter still tracks line position so the summary lands
    /// on its own line; it just never draws.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ticking: false,
            drawn: false,
            at_line_start: true,
            spinner: Spinner::new(),
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn start(&mut self) {
        self.ticking = self.enabled;
    }

    /// Redraw for one timer tick. No-op once stopped.
    pub fn tick(&mut self, state: &RunState, now: Instant) -> Vec<CoreCommand> {
        if !self.ticking {
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(2);

        // Partial output line (no trailing newline): keep it, draw below.
        if !self.drawn && !self.at_line_start {
            commands.push(CoreCommand::BreakLine);
            self.at_line_start = true;
        }

        let frame = StatusFrame::compute(state, now, &mut self.spinner);
        commands.push(CoreCommand::RenderStatus(frame.render()));
        self.drawn = true;

        commands
    }

    /// Commands to run before forwarding `bytes`, updating line tracking as
    /// if the chunk had been written.
    pub fn wrap_output(&mut self, bytes: &[u8]) -> Vec<CoreCommand> {
        let mut commands = Vec::new();

        if self.drawn {
            commands.push(CoreCommand::ClearStatus);
            self.drawn = false;
        }

        if let Some(last) = bytes.last() {
            self.at_line_start = *last == b'\n';
        }

        commands
    }

    /// Stop ticking and leave the cursor at the start of a clean line.
    ///
    /// Idempotent: a second call returns no commands.
    pub fn stop(&mut self) -> Vec<CoreCommand> {
        self.ticking = false;

        if self.drawn {
            self.drawn = false;
            self.at_line_start = true;
            return vec![CoreCommand::ClearStatus];
        }

        if !self.at_line_start {
            self.at_line_start = true;
            return vec![CoreCommand::BreakLine];
        }

        Vec::new()
    }
}
