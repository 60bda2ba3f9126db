// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`interactive`] owns the `CommandRunner` seam and the real
//!   terminal-passthrough implementation on `tokio::process::Command`.
//! - [`pipeline`] sequences the configured commands for one dispatch, with
//!   the separator / marker framing around the transcript.

pub mod interactive;
pub mod pipeline;

pub use interactive::{CommandOutcome, CommandRunner, InteractiveRunner};
pub use pipeline::{run_pipeline, FALLBACK_TERMINAL_WIDTH};
