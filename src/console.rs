// src/console.rs

//! Terminal writer that executes [`CoreCommand`]s.
//!
//! The status line and forwarded stdout share `out`; forwarded stderr goes
//! to `err`. Every command is flushed before returning so a stderr chunk can
//! never overtake a pending status-line erase on stdout.

use std::io::{self, Stderr, Stdout, Write};

use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::engine::{CoreCommand, Summary};
use crate::types::StreamKind;

pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console bound to the real process streams.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Execute a single command. `Exit` is not a terminal operation and is
    /// ignored here.
    pub fn execute(&mut self, command: &CoreCommand) -> io::Result<()> {
        match command {
            CoreCommand::Forward { stream, bytes } => self.forward(*stream, bytes),
            CoreCommand::BreakLine => self.break_line(),
            CoreCommand::RenderStatus(text) => self.render_status(text),
            CoreCommand::ClearStatus => self.clear_status(),
            CoreCommand::PrintSummary(summary) => self.print_summary(summary),
            CoreCommand::PrintFailure(message) => self.print_failure(message),
            CoreCommand::PrintInterrupted => self.print_interrupted(),
            CoreCommand::Exit(_) => Ok(()),
        }
    }

    fn forward(&mut self, stream: StreamKind, bytes: &[u8]) -> io::Result<()> {
        match stream {
            StreamKind::Stdout => {
                self.out.write_all(bytes)?;
                self.out.flush()
            }
            StreamKind::Stderr => {
                self.err.write_all(bytes)?;
                self.err.flush()
            }
        }
    }

    fn break_line(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    fn erase_line(&mut self) -> io::Result<()> {
        self.out.write_all(b"\r")?;
        queue!(self.out, Clear(ClearType::CurrentLine))
    }

    fn render_status(&mut self, text: &str) -> io::Result<()> {
        self.erase_line()?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn clear_status(&mut self) -> io::Result<()> {
        self.erase_line()?;
        self.out.flush()
    }

    fn print_summary(&mut self, summary: &Summary) -> io::Result<()> {
        for line in summary.lines() {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn print_failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{message}")?;
        self.err.flush()
    }

    fn print_interrupted(&mut self) -> io::Result<()> {
        writeln!(self.err, "Interrupted")?;
        self.err.flush()
    }
}
