// src/exec/pipeline.rs

use std::path::Path;

use anyhow::Result;
use tracing::{error, warn};

use crate::exec::interactive::{CommandOutcome, CommandRunner};

/// Width used for the separator line when the terminal size is unknown
/// (e.g. output redirected to a file).
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH) as usize
}

/// Run every command of the pipeline in order, each to completion, inside
/// `cwd`.
///
/// The transcript is bracketed by full-width `=` separators and each command
/// by `>>> cmd >>>` / `<<<` markers. A failing or unspawnable command is
/// logged and the pipeline continues with the next one; there is no
/// fail-fast and no retry. An empty pipeline just prints the separators.
pub async fn run_pipeline<R>(runner: &mut R, commands: &[String], cwd: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    let separator = "=".repeat(terminal_width());
    println!("{separator}");

    for command in commands {
        println!(">>> {command} >>>");
        match runner
            .run_interactive(command.clone(), cwd.to_path_buf())
            .await
        {
            Ok(CommandOutcome::Success) => {}
            Ok(CommandOutcome::Failed(code)) => {
                warn!(command = %command, exit_code = code, "command exited with failure");
            }
            Err(err) => {
                error!(command = %command, error = %err, "command could not be run");
            }
        }
        println!("<<<");
    }

    println!("{separator}");
    Ok(())
}
