// src/exec/child.rs

//! Spawning the child and classifying its exit.

use std::process::ExitStatus;

use tokio::process::Child;
use tracing::{debug, info};

use crate::errors::{FAILURE_EXIT_CODE, ProcwatchError, Result};
use crate::exec::CommandSpec;
use crate::types::ShellMode;

/// How the child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Ran to completion with this status (zero or not).
    Exited(i32),
    /// Killed by a signal (Unix only).
    Signaled(i32),
}

impl ChildExit {
    /// Classify from raw parts of an exit status.
    pub fn from_parts(code: Option<i32>, signal: Option<i32>) -> Self {
        match (code, signal) {
            (Some(code), _) => ChildExit::Exited(code),
            (None, Some(sig)) => ChildExit::Signaled(sig),
            (None, None) => ChildExit::Exited(FAILURE_EXIT_CODE),
        }
    }

    pub fn from_status(status: ExitStatus) -> Self {
        Self::from_parts(status.code(), exit_signal(&status))
    }

    /// Exit code procwatch itself terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChildExit::Exited(code) => *code,
            ChildExit::Signaled(sig) => 128 + sig,
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Spawn the child process for `spec`.
///
/// In shell mode the command's first word is looked up through the shell
/// first, so a missing command is a spawn failure rather than a child that
/// exits 127.
pub async fn spawn_child(spec: &CommandSpec, mode: ShellMode) -> Result<Child> {
    if mode == ShellMode::Shell {
        check_launchable(spec).await?;
    }

    info!(
        cmd = %spec.command_line(),
        ?mode,
        "starting child process"
    );

    let child = spec
        .to_command(mode)
        .spawn()
        .map_err(|e| ProcwatchError::Spawn {
            command: spec.command_line(),
            message: e.to_string(),
        })?;

    debug!(pid = ?child.id(), "child process spawned");
    Ok(child)
}

/// `$1` is the word to look up. Paths must be executable regular files;
/// bare names go through `command -v`, which also knows built-ins and
/// keywords.
#[cfg(unix)]
const LAUNCH_CHECK: &str = r#"case "$1" in
  */*) [ -e "$1" ] || exit 127; [ -f "$1" ] && [ -x "$1" ] || exit 126 ;;
  *) command -v "$1" >/dev/null 2>&1 || exit 127 ;;
esac"#;

#[cfg(unix)]
async fn check_launchable(spec: &CommandSpec) -> Result<()> {
    use std::process::Stdio;

    use tokio::process::Command;

    let Some(word) = spec.launch_target() else {
        debug!(cmd = %spec.command_line(), "first word is shell syntax; skipping launch check");
        return Ok(());
    };

    let status = Command::new("sh")
        .arg("-c")
        .arg(LAUNCH_CHECK)
        .arg("sh")
        .arg(word)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await;

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            let message = match status.code() {
                Some(126) => "permission denied or not executable",
                _ => "command not found",
            };
            info!(word, ?status, "shell cannot launch command");
            Err(ProcwatchError::Spawn {
                command: spec.command_line(),
                message: message.to_string(),
            })
        }
        // Spawning the command itself reports a missing shell.
        Err(e) => {
            debug!(error = %e, "launch check could not run");
            Ok(())
        }
    }
}

// TODO: look commands up with `where` so cmd's 9009 becomes a spawn failure too.
#[cfg(not(unix))]
async fn check_launchable(_spec: &CommandSpec) -> Result<()> {
    Ok(())
}
