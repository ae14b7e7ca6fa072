// src/config/mod.rs

//! Runtime configuration for procwatch.
//!
//! Responsibilities:
//! - Define the unvalidated and validated data model (`model.rs`).
//! - Validate basic invariants like the tick interval range (`validate.rs`).
//!
//! There is no config file: values come from the CLI only.

pub mod model;
pub mod validate;

pub use model::{MonitorConfig, RawMonitorConfig};
pub use validate::{MAX_TICK_MS, MIN_TICK_MS};
