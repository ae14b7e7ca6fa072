// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for turning the user's command line into a
//! `tokio::process::Command`, spawning it, and translating its exit status
//! into something the engine understands.
//!
//! - [`command`] holds [`CommandSpec`] and the shell / direct command builder.
//! - [`child`] spawns the process and classifies how it ended.

pub mod child;
pub mod command;

pub use child::{ChildExit, spawn_child};
pub use command::CommandSpec;
