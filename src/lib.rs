// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod policy;
pub mod prompt;
pub mod session;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{change_queue, Dispatcher};
use crate::exec::InteractiveRunner;
use crate::prompt::TerminalPrompter;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (defaulting to empty when absent or corrupt)
/// - the interactive session setup (command list + bulk path reset)
/// - the change queue, file watcher and Ctrl-C handling
/// - the dispatcher loop
/// - the two-phase shutdown (stop watching, then persist once)
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let mut config = config::load_or_default(&config_path);

    let mut prompter = TerminalPrompter::new();
    session::init_config(&mut config, &mut prompter)?;

    let (queue_tx, queue_rx) = change_queue();

    let watcher_handle = watch::spawn_watcher(PathBuf::from(&args.dir), queue_tx.clone())?;

    // Ctrl-C → shutdown event on the change queue, behind pending events.
    {
        let queue_tx = queue_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            queue_tx.push_shutdown();
        });
    }

    let dispatcher = Dispatcher::new(config, prompter, InteractiveRunner::new(), queue_rx);
    let config = dispatcher.run().await?;

    // Phase one: stop accepting filesystem events.
    drop(watcher_handle);

    // Phase two: persist the config exactly once. A failed save propagates.
    config::save(&config_path, &config)?;
    info!(path = ?config_path, "config saved, exiting");

    Ok(())
}
