mod common;

use std::time::{Duration, Instant};

use procwatch::engine::{
    CoreCommand, CoreMonitor, INTERRUPTED_EXIT_CODE, MonitorEvent, RunPhase, Summary,
};
use procwatch::exec::ChildExit;
use procwatch::status::SPINNER_FRAMES;
use procwatch::types::StreamKind;

use crate::common::at;

fn running(status_enabled: bool) -> (CoreMonitor, Instant) {
    let start = Instant::now();
    let mut core = CoreMonitor::new("make build", status_enabled);
    let step = core.step(MonitorEvent::Spawned, start);
    assert!(step.commands.is_empty());
    assert!(step.keep_running);
    (core, start)
}

fn output(stream: StreamKind, text: &str) -> MonitorEvent {
    MonitorEvent::Output {
        stream,
        bytes: text.as_bytes().to_vec(),
    }
}

#[test]
fn test_spawned_moves_to_running_and_creates_state() {
    let (core, start) = running(true);
    assert_eq!(core.phase(), RunPhase::Running);
    let state = core.run_state().expect("run state after spawn");
    assert_eq!(state.started(), start);
    assert_eq!(state.last_output(), start);
    assert!(core.presenter().is_ticking());
}

#[test]
fn test_tick_renders_status_line() {
    let (mut core, start) = running(true);

    let step = core.step(MonitorEvent::Tick, at(start, 3200));
    assert!(step.keep_running);
    assert_eq!(
        step.commands,
        vec![CoreCommand::RenderStatus(format!(
            "{} Elapsed: 3s | Status: quiet",
            SPINNER_FRAMES[0]
        ))]
    );

    let step = core.step(MonitorEvent::Tick, at(start, 3320));
    assert_eq!(
        step.commands,
        vec![CoreCommand::RenderStatus(format!(
            "{} Elapsed: 3s | Status: quiet",
            SPINNER_FRAMES[1]
        ))]
    );
}

#[test]
fn test_output_clears_drawn_status_before_forwarding() {
    let (mut core, start) = running(true);
    core.step(MonitorEvent::Tick, start);

    let step = core.step(output(StreamKind::Stdout, "hello\n"), at(start, 50));
    assert_eq!(
        step.commands,
        vec![
            CoreCommand::ClearStatus,
            CoreCommand::Forward {
                stream: StreamKind::Stdout,
                bytes: b"hello\n".to_vec()
            },
        ]
    );

    // Nothing drawn now, so the next chunk is forwarded as-is.
    let step = core.step(output(StreamKind::Stderr, "oops\n"), at(start, 60));
    assert_eq!(
        step.commands,
        vec![CoreCommand::Forward {
            stream: StreamKind::Stderr,
            bytes: b"oops\n".to_vec()
        }]
    );
}

#[test]
fn test_output_updates_idle_clock_before_next_tick() {
    let (mut core, start) = running(true);

    core.step(output(StreamKind::Stdout, "step\n"), at(start, 9000));
    assert_eq!(core.run_state().unwrap().last_output(), at(start, 9000));

    let step = core.step(MonitorEvent::Tick, at(start, 9100));
    match &step.commands[..] {
        [CoreCommand::RenderStatus(text)] => assert!(text.ends_with("Status: active"), "{text}"),
        other => panic!("expected a single render, got {other:?}"),
    }
}

#[test]
fn test_partial_output_line_is_not_overwritten_by_status() {
    let (mut core, start) = running(true);

    core.step(output(StreamKind::Stdout, "Progress: 40%"), at(start, 10));
    let step = core.step(MonitorEvent::Tick, at(start, 130));

    assert_eq!(step.commands.len(), 2);
    assert_eq!(step.commands[0], CoreCommand::BreakLine);
    assert!(matches!(step.commands[1], CoreCommand::RenderStatus(_)));
}

#[test]
fn test_close_stops_status_then_prints_summary_and_exits() {
    let (mut core, start) = running(true);
    core.step(MonitorEvent::Tick, start);

    let step = core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(3),
        },
        at(start, 4250),
    );

    assert!(!step.keep_running);
    assert_eq!(step.exit_code(), Some(3));
    assert_eq!(
        step.commands,
        vec![
            CoreCommand::ClearStatus,
            CoreCommand::PrintSummary(Summary {
                elapsed: Duration::from_millis(4250),
                exit_code: 3,
            }),
            CoreCommand::Exit(3),
        ]
    );
    assert_eq!(core.phase(), RunPhase::Finished);
    assert_eq!(core.run_state().unwrap().exit_code(), Some(3));
}

#[test]
fn test_no_ticks_after_close() {
    let (mut core, start) = running(true);
    core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(0),
        },
        at(start, 100),
    );

    for ms in [200, 320, 440] {
        let step = core.step(MonitorEvent::Tick, at(start, ms));
        assert!(step.commands.is_empty());
    }
    let again = core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(0),
        },
        at(start, 500),
    );
    assert!(again.commands.is_empty());
    assert!(!core.presenter().is_ticking());
}

#[test]
fn test_close_after_partial_line_breaks_before_summary() {
    let (mut core, start) = running(false);
    core.step(output(StreamKind::Stdout, "no newline"), at(start, 10));

    let step = core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(0),
        },
        at(start, 20),
    );
    assert_eq!(step.commands[0], CoreCommand::BreakLine);
    assert!(matches!(step.commands[1], CoreCommand::PrintSummary(_)));
}

#[test]
fn test_signal_exit_maps_to_128_plus_signal() {
    let (mut core, start) = running(false);
    let step = core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Signaled(9),
        },
        at(start, 20),
    );
    assert_eq!(step.exit_code(), Some(137));
}

#[test]
fn test_spawn_failure_reports_and_exits_one() {
    let mut core = CoreMonitor::new("nope", true);
    let step = core.step(
        MonitorEvent::SpawnFailed {
            message: "Failed to start 'nope': No such file or directory".to_string(),
        },
        Instant::now(),
    );

    assert_eq!(core.phase(), RunPhase::Failed);
    assert!(!step.keep_running);
    assert_eq!(
        step.commands,
        vec![
            CoreCommand::PrintFailure(
                "Failed to start 'nope': No such file or directory".to_string()
            ),
            CoreCommand::Exit(1),
        ]
    );
    assert!(core.run_state().is_none());
}

#[test]
fn test_exit_127_is_reported_like_any_other_code() {
    let (mut core, start) = running(true);
    core.step(MonitorEvent::Tick, start);

    let step = core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(127),
        },
        at(start, 1_500),
    );

    assert_eq!(core.phase(), RunPhase::Finished);
    assert_eq!(
        step.commands,
        vec![
            CoreCommand::ClearStatus,
            CoreCommand::PrintSummary(Summary {
                elapsed: Duration::from_millis(1_500),
                exit_code: 127,
            }),
            CoreCommand::Exit(127),
        ]
    );
}

#[test]
fn test_abort_clears_drawn_status_and_fails() {
    let (mut core, start) = running(true);
    core.step(MonitorEvent::Tick, start);

    let step = core.step(
        MonitorEvent::Aborted {
            reason: "IO error: broken pipe".to_string(),
        },
        at(start, 40),
    );

    assert_eq!(core.phase(), RunPhase::Failed);
    assert!(!step.keep_running);
    assert_eq!(step.commands, vec![CoreCommand::ClearStatus, CoreCommand::Exit(1)]);

    assert!(core.step(MonitorEvent::Tick, at(start, 50)).commands.is_empty());
}

#[test]
fn test_abort_after_close_is_ignored() {
    let (mut core, start) = running(false);
    core.step(
        MonitorEvent::Closed {
            exit: ChildExit::Exited(0),
        },
        at(start, 10),
    );

    let step = core.step(
        MonitorEvent::Aborted {
            reason: "IO error".to_string(),
        },
        at(start, 20),
    );
    assert_eq!(core.phase(), RunPhase::Finished);
    assert!(step.commands.is_empty());
}

#[test]
fn test_interrupt_stops_status_and_exits_130() {
    let (mut core, start) = running(true);
    core.step(MonitorEvent::Tick, start);

    let step = core.step(MonitorEvent::Interrupted, at(start, 700));
    assert_eq!(core.phase(), RunPhase::Interrupted);
    assert_eq!(
        step.commands,
        vec![
            CoreCommand::ClearStatus,
            CoreCommand::PrintInterrupted,
            CoreCommand::Exit(INTERRUPTED_EXIT_CODE),
        ]
    );

    let tick = core.step(MonitorEvent::Tick, at(start, 820));
    assert!(tick.commands.is_empty());
}

#[test]
fn test_disabled_presenter_never_renders() {
    let (mut core, start) = running(false);
    assert!(!core.presenter().is_ticking());

    let step = core.step(MonitorEvent::Tick, at(start, 120));
    assert!(step.commands.is_empty());

    let step = core.step(output(StreamKind::Stdout, "line\n"), at(start, 130));
    assert_eq!(step.commands.len(), 1);
}

#[test]
fn test_events_before_spawn_are_ignored() {
    let mut core = CoreMonitor::new("cmd", true);
    let now = Instant::now();

    assert!(core.step(MonitorEvent::Tick, now).commands.is_empty());
    assert!(core.step(output(StreamKind::Stdout, "x"), now).commands.is_empty());
    assert_eq!(core.phase(), RunPhase::Spawning);
}

#[test]
fn test_summary_lines_use_one_decimal() {
    let summary = Summary {
        elapsed: Duration::from_millis(12_345),
        exit_code: 0,
    };
    assert_eq!(
        summary.lines(),
        ["Completed in 12.3s".to_string(), "Exit code: 0".to_string()]
    );
}
