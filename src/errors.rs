// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

/// Exit code used for every failure of `procwatch` itself (as opposed to a
/// wrapped command that ran and exited non-zero).
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum ProcwatchError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to start '{command}': {message}")]
    Spawn { command: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProcwatchError {
    /// Process exit code this error terminates the program with.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    pub fn no_command() -> Self {
        ProcwatchError::Usage("No command provided".to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProcwatchError>;
