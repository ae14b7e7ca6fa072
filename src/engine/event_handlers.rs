// src/engine/event_handlers.rs

//! Event handling logic for the core monitor.
//!
//! Every handler that leaves `Running` stops the presenter first, so the
//! commands it returns always clear the status line before anything else is
//! printed.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::engine::presenter::StatusPresenter;
use crate::engine::{INTERRUPTED_EXIT_CODE, RunPhase, Summary};
use crate::errors::FAILURE_EXIT_CODE;
use crate::exec::ChildExit;
use crate::state::RunState;
use crate::types::StreamKind;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Write these bytes verbatim to the matching outer stream.
    Forward { stream: StreamKind, bytes: Vec<u8> },
    /// Move to a fresh line on stdout.
    BreakLine,
    /// Return to line start, erase the line and draw this status text.
    RenderStatus(String),
    /// Return to line start and erase the status line.
    ClearStatus,
    /// Print the completion report on stdout.
    PrintSummary(Summary),
    /// Print a failure message on stderr.
    PrintFailure(String),
    /// Print the interrupt notice on stderr.
    PrintInterrupted,
    /// Terminate with this exit code.
    Exit(i32),
}

/// Decision returned by the core after handling a single `MonitorEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    /// Commands the IO shell should execute, in order.
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    pub fn idle() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }

    pub fn continue_with(commands: Vec<CoreCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }

    fn terminate(mut commands: Vec<CoreCommand>, exit_code: i32) -> Self {
        commands.push(CoreCommand::Exit(exit_code));
        Self {
            commands,
            keep_running: false,
        }
    }

    /// Exit code carried by this step, if it ends the run.
    pub fn exit_code(&self) -> Option<i32> {
        self.commands.iter().find_map(|c| match c {
            CoreCommand::Exit(code) => Some(*code),
            _ => None,
        })
    }
}

/// `spawning -> running`: create the run state and start ticking.
pub fn handle_spawned(
    phase: &mut RunPhase,
    run: &mut Option<RunState>,
    presenter: &mut StatusPresenter,
    now: Instant,
) -> CoreStep {
    if *phase != RunPhase::Spawning {
        warn!(?phase, "spawn reported outside of spawning phase; ignoring");
        return CoreStep::idle();
    }

    *phase = RunPhase::Running;
    *run = Some(RunState::new(now));
    presenter.start();

    debug!("run started; status presenter ticking={}", presenter.is_ticking());
    CoreStep::idle()
}

/// `spawning -> failed`: the OS refused to start the command.
pub fn handle_spawn_failed(
    phase: &mut RunPhase,
    presenter: &mut StatusPresenter,
    message: String,
) -> CoreStep {
    if phase.is_terminal() {
        return CoreStep::idle();
    }

    *phase = RunPhase::Failed;
    let mut commands = presenter.stop();
    commands.push(CoreCommand::PrintFailure(message));
    CoreStep::terminate(commands, FAILURE_EXIT_CODE)
}

/// Forward a chunk and refresh the idle clock.
pub fn handle_output(
    phase: RunPhase,
    run: &mut Option<RunState>,
    presenter: &mut StatusPresenter,
    stream: StreamKind,
    bytes: Vec<u8>,
    now: Instant,
) -> CoreStep {
    let Some(state) = run.as_mut() else {
        return CoreStep::idle();
    };
    if phase != RunPhase::Running {
        return CoreStep::idle();
    }

    state.observe_output(now);

    let mut commands = presenter.wrap_output(&bytes);
    commands.push(CoreCommand::Forward { stream, bytes });
    CoreStep::continue_with(commands)
}

/// Redraw the status line.
pub fn handle_tick(
    phase: RunPhase,
    run: &Option<RunState>,
    presenter: &mut StatusPresenter,
    now: Instant,
) -> CoreStep {
    match (phase, run) {
        (RunPhase::Running, Some(state)) => CoreStep::continue_with(presenter.tick(state, now)),
        _ => CoreStep::idle(),
    }
}

/// `running -> finished`: print the summary and propagate the child's code.
pub fn handle_closed(
    phase: &mut RunPhase,
    run: &mut Option<RunState>,
    presenter: &mut StatusPresenter,
    command_line: &str,
    exit: ChildExit,
    now: Instant,
) -> CoreStep {
    if *phase != RunPhase::Running {
        return CoreStep::idle();
    }
    let Some(state) = run.as_mut() else {
        return CoreStep::idle();
    };

    let exit_code = exit.exit_code();
    state.finish(exit_code);
    let mut commands = presenter.stop();

    *phase = RunPhase::Finished;
    let summary = Summary {
        elapsed: state.elapsed(now),
        exit_code,
    };
    info!(
        cmd = command_line,
        exit_code,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "child closed"
    );

    commands.push(CoreCommand::PrintSummary(summary));
    CoreStep::terminate(commands, exit_code)
}

/// The IO shell hit an error it cannot recover from: clear the status line
/// and end as `failed`. The shell reports the error itself.
pub fn handle_aborted(
    phase: &mut RunPhase,
    presenter: &mut StatusPresenter,
    reason: &str,
) -> CoreStep {
    if phase.is_terminal() {
        return CoreStep::idle();
    }

    *phase = RunPhase::Failed;
    warn!(reason, "run aborted");
    CoreStep::terminate(presenter.stop(), FAILURE_EXIT_CODE)
}

/// Ctrl-C: stop everything and exit with the interrupt code.
pub fn handle_interrupt(phase: &mut RunPhase, presenter: &mut StatusPresenter) -> CoreStep {
    if phase.is_terminal() {
        return CoreStep::idle();
    }

    *phase = RunPhase::Interrupted;
    info!("interrupt received; stopping");

    let mut commands = presenter.stop();
    commands.push(CoreCommand::PrintInterrupted);
    CoreStep::terminate(commands, INTERRUPTED_EXIT_CODE)
}
