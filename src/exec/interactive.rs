// src/exec/interactive.rs

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::info;

/// Result of one interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failed(i32), // exit code
}

/// Runs a single command string attached to the operator's terminal.
///
/// This is the only place that touches process spawning, so tests can swap
/// in a recording implementation instead of starting real processes. The
/// future returned by `run_interactive` resolves when the command exits;
/// callers must await it before starting the next command, since all
/// commands share the one controlling terminal.
pub trait CommandRunner: Send {
    fn run_interactive(
        &mut self,
        command: String,
        cwd: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>>;
}

/// The real runner: spawns the command through the platform shell with
/// stdin/stdout/stderr inherited from the controlling terminal, so the
/// operator can interact with it exactly as if they had typed it into a
/// shell themselves.
#[derive(Debug, Default)]
pub struct InteractiveRunner;

impl InteractiveRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for InteractiveRunner {
    fn run_interactive(
        &mut self,
        command: String,
        cwd: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        Box::pin(async move {
            let mut cmd = if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(&command);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c").arg(&command);
                c
            };

            cmd.current_dir(&cwd)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let mut child = cmd
                .spawn()
                .with_context(|| format!("spawning interactive process for '{command}'"))?;

            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for '{command}' to exit"))?;

            let code = status.code().unwrap_or(-1);
            info!(
                command = %command,
                exit_code = code,
                success = status.success(),
                "interactive command exited"
            );

            Ok(if status.success() {
                CommandOutcome::Success
            } else {
                CommandOutcome::Failed(code)
            })
        })
    }
}
