// src/status/frame.rs

use std::time::{Duration, Instant};

use crate::state::RunState;
use crate::status::ActivityState;

/// Braille spinner cycled once per rendered tick.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Monotonic spinner position.
///
/// The glyph for tick `n` is `SPINNER_FRAMES[n % SPINNER_FRAMES.len()]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spinner {
    ticks: u64,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of glyphs handed out so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Glyph for the current position, then advance.
    pub fn advance(&mut self) -> &'static str {
        let glyph = Self::glyph_at(self.ticks);
        self.ticks = self.ticks.wrapping_add(1);
        glyph
    }

    pub fn glyph_at(tick: u64) -> &'static str {
        SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
    }
}

/// One rendered snapshot of the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFrame {
    pub glyph: &'static str,
    pub elapsed_secs: u64,
    pub idle: Duration,
    pub activity: ActivityState,
}

impl StatusFrame {
    /// Compute the frame for `now`, taking the next spinner glyph.
    pub fn compute(state: &RunState, now: Instant, spinner: &mut Spinner) -> Self {
        let idle = state.idle(now);
        Self {
            glyph: spinner.advance(),
            elapsed_secs: state.elapsed(now).as_secs(),
            idle,
            activity: ActivityState::from_idle(idle),
        }
    }

    /// The visible text, without any cursor control or trailing newline.
    pub fn render(&self) -> String {
        format!(
            "{} Elapsed: {}s | Status: {}",
            self.glyph, self.elapsed_secs, self.activity
        )
    }
}
