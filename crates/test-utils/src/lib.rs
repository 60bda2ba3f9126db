//! Test helpers for fw: scripted prompts and recorded command execution.

pub mod prompter;
pub mod runner;

use std::sync::Once;

pub use prompter::ScriptedPrompter;
pub use runner::RecordingRunner;

static INIT: Once = Once::new();

/// Initialise tracing for tests. Safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}
