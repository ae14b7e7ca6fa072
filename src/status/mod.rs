// src/status/mod.rs

//! Status line model.
//!
//! Everything in here is pure: no terminal IO, no clocks. Callers pass in
//! the relevant instants / durations and get back values or strings.
//!
//! - [`activity`] classifies how recently the child produced output.
//! - [`frame`] holds the spinner and the per-tick [`StatusFrame`].

pub mod activity;
pub mod frame;

pub use activity::{ActivityState, QUIET_AFTER, STILL_RUNNING_AFTER};
pub use frame::{SPINNER_FRAMES, Spinner, StatusFrame};
