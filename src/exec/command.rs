// src/exec/command.rs

use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{ProcwatchError, Result};
use crate::types::ShellMode;

/// The wrapped command as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from `[program, args...]`.
    ///
    /// Fails with a usage error if there is no program or it is blank, so an
    /// empty command never reaches the OS.
    pub fn from_args<S: AsRef<str>>(argv: &[S]) -> Result<Self> {
        let (program, rest) = argv.split_first().ok_or_else(ProcwatchError::no_command)?;
        let program = program.as_ref();
        if program.trim().is_empty() {
            return Err(ProcwatchError::no_command());
        }

        Ok(Self {
            program: program.to_string(),
            args: rest.iter().map(|a| a.as_ref().to_string()).collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program and arguments joined with single spaces, as handed to the shell.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// First word of the command line when it is a plain command name or
    /// path, i.e. something the shell will try to execute as is.
    ///
    /// `None` for words the shell would rewrite first (quotes, expansions,
    /// variable assignments, redirections, grouping).
    pub fn launch_target(&self) -> Option<&str> {
        let word = self.program.split_whitespace().next()?;
        let plain = !word.starts_with('-')
            && !word.contains(|c: char| SHELL_SPECIAL.contains(c));
        plain.then_some(word)
    }

    /// Build the OS command.
    ///
    /// stdin is inherited so interactive children work; stdout and stderr are
    /// piped separately so they can be forwarded chunk by chunk.
    pub fn to_command(&self, mode: ShellMode) -> Command {
        let mut cmd = match mode {
            ShellMode::Shell => shell_command(&self.command_line()),
            ShellMode::Direct => {
                let mut c = Command::new(&self.program);
                c.args(&self.args);
                c
            }
        };

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }
}

const SHELL_SPECIAL: &str = "'\"\\$`=(){}<>|&;*?[]~!#";

/// Build a shell command appropriate for the platform.
fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(line);
        c
    }
}
