use std::fmt;

/// How the wrapped command is turned into an OS process.
///
/// - `Shell`: join command and arguments with spaces and hand the line to the
///   platform interpreter (`sh -c` / `cmd /C`), so built-ins, globs and pipes
///   behave as if typed directly (default behaviour).
/// - `Direct`: spawn the executable itself with the argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    Shell,
    Direct,
}

impl Default for ShellMode {
    fn default() -> Self {
        ShellMode::Shell
    }
}

/// Which of the child's output streams a chunk came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
        }
    }
}
