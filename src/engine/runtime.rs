// src/engine/runtime.rs

use std::fmt;
use std::future::Future;
use std::io::Write;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::console::Console;
use crate::errors::{FAILURE_EXIT_CODE, ProcwatchError, Result};
use crate::exec::{ChildExit, CommandSpec, spawn_child};
use crate::types::StreamKind;

use super::core::CoreMonitor;
use super::{CoreStep, MonitorEvent};

/// Upper bound for a single forwarded chunk.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Drives the core monitor in response to OS events and writes the
/// resulting commands to a [`Console`].
///
/// This is a pure IO shell around `CoreMonitor`, which contains all the
/// monitoring semantics. A single `select!` loop owns the child, its pipes,
/// the status ticker and the interrupt listener; all of them are dropped
/// when `run` returns, whichever way it returns.
pub struct Runtime<O: Write, E: Write> {
    core: CoreMonitor,
    spec: CommandSpec,
    config: MonitorConfig,
    console: Console<O, E>,
}

impl<O: Write, E: Write> fmt::Debug for Runtime<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl<O: Write, E: Write> Runtime<O, E> {
    pub fn new(
        spec: CommandSpec,
        config: MonitorConfig,
        status_enabled: bool,
        console: Console<O, E>,
    ) -> Self {
        let core = CoreMonitor::new(spec.command_line(), status_enabled);
        Self {
            core,
            spec,
            config,
            console,
        }
    }

    /// Run until the child closes, using Ctrl-C as the interrupt source.
    pub async fn run(self) -> Result<i32> {
        self.run_until(shutdown_signal()).await
    }

    /// Run until the child closes or `interrupt` resolves.
    ///
    /// Returns the exit code procwatch should terminate with.
    pub async fn run_until<F>(mut self, interrupt: F) -> Result<i32>
    where
        F: Future<Output = ()>,
    {
        let mut child = match spawn_child(&self.spec, self.config.shell()).await {
            Ok(child) => child,
            Err(err) => {
                warn!(error = %err, "spawn failed");
                let step = self.core.step(
                    MonitorEvent::SpawnFailed {
                        message: err.to_string(),
                    },
                    Instant::now(),
                );
                return Ok(self.apply(step)?.unwrap_or(FAILURE_EXIT_CODE));
            }
        };

        match self.event_loop(&mut child, interrupt).await {
            Ok(code) => {
                info!(exit_code = code, "procwatch finished");
                Ok(code)
            }
            Err(err) => {
                self.abort(&err);
                Err(err)
            }
        }
    }

    async fn event_loop<F>(&mut self, child: &mut Child, interrupt: F) -> Result<i32>
    where
        F: Future<Output = ()>,
    {
        let mut stdout = child.stdout.take();
        let mut stderr = child.stderr.take();
        let mut out_buf = vec![0u8; CHUNK_SIZE];
        let mut err_buf = vec![0u8; CHUNK_SIZE];
        let mut exit: Option<ChildExit> = None;

        // First tick completes immediately: the status line appears at spawn.
        let mut ticker = time::interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tokio::pin!(interrupt);

        let step = self.core.step(MonitorEvent::Spawned, Instant::now());
        self.apply(step)?;

        loop {
            // "Closed" means exited *and* both pipes drained.
            if let Some(exit) = exit {
                if stdout.is_none() && stderr.is_none() {
                    let step = self.core.step(MonitorEvent::Closed { exit }, Instant::now());
                    return Ok(self.apply(step)?.unwrap_or(exit.exit_code()));
                }
            }

            let event = tokio::select! {
                res = read_chunk(&mut stdout, &mut out_buf), if stdout.is_some() => {
                    match chunk_event(StreamKind::Stdout, res, &out_buf) {
                        Some(event) => event,
                        None => {
                            stdout = None;
                            continue;
                        }
                    }
                }
                res = read_chunk(&mut stderr, &mut err_buf), if stderr.is_some() => {
                    match chunk_event(StreamKind::Stderr, res, &err_buf) {
                        Some(event) => event,
                        None => {
                            stderr = None;
                            continue;
                        }
                    }
                }
                status = child.wait(), if exit.is_none() => {
                    let status = status?;
                    let classified = ChildExit::from_status(status);
                    debug!(?status, ?classified, "child exited; draining output");
                    exit = Some(classified);
                    continue;
                }
                _ = ticker.tick() => MonitorEvent::Tick,
                _ = &mut interrupt => {
                    if let Err(e) = child.start_kill() {
                        warn!(error = %e, "failed to kill child process on interrupt");
                    }
                    MonitorEvent::Interrupted
                }
            };

            let step = self.core.step(event, Instant::now());
            if let Some(code) = self.apply(step)? {
                return Ok(code);
            }
        }
    }

    /// Execute the commands of one core step.
    ///
    /// Returns `Some(exit_code)` once the core says to stop.
    fn apply(&mut self, step: CoreStep) -> Result<Option<i32>> {
        for command in &step.commands {
            self.console.execute(command)?;
        }

        if step.keep_running {
            return Ok(None);
        }
        Ok(Some(step.exit_code().unwrap_or(FAILURE_EXIT_CODE)))
    }

    /// Stop the core after `err` so a drawn status line is erased before the
    /// error reaches the user. Write failures here are only logged.
    fn abort(&mut self, err: &ProcwatchError) {
        let step = self.core.step(
            MonitorEvent::Aborted {
                reason: err.to_string(),
            },
            Instant::now(),
        );
        for command in &step.commands {
            if let Err(e) = self.console.execute(command) {
                debug!(error = %e, "could not clear status line after error");
                break;
            }
        }
    }
}

/// Read the next chunk from an optional pipe; pending forever once closed.
async fn read_chunk<R>(reader: &mut Option<R>, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match reader {
        Some(r) => r.read(buf).await,
        None => std::future::pending().await,
    }
}

/// Turn a read result into an output event, or `None` at EOF / on error.
fn chunk_event(
    stream: StreamKind,
    res: std::io::Result<usize>,
    buf: &[u8],
) -> Option<MonitorEvent> {
    match res {
        Ok(0) => {
            debug!(%stream, "child stream reached EOF");
            None
        }
        Ok(n) => Some(MonitorEvent::Output {
            stream,
            bytes: buf[..n].to_vec(),
        }),
        Err(e) => {
            warn!(%stream, error = %e, "error reading child stream; closing it");
            None
        }
    }
}

/// Resolves on Ctrl-C. If the listener cannot be installed, never resolves.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
