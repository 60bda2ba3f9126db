// src/engine/dispatcher.rs

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::queue::{ChangeReceiver, QueueEvent};
use crate::exec::{run_pipeline, CommandRunner};
use crate::policy::PathPolicy;
use crate::prompt::Prompter;

/// What a single dispatch did, mostly interesting for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Policy said execute; the full pipeline ran.
    Executed,
    /// Policy said skip; nothing ran.
    Skipped,
}

/// The single consumer of the change queue.
///
/// Owns the config (commands + policy table) and all interactive I/O for
/// the lifetime of the loop. One iteration is a full dispatch: pop a path,
/// resolve its policy (prompting on first encounter), and conditionally run
/// the pipeline. The pop is the loop's only blocking point; a shutdown event
/// breaks the loop and hands the config back for persistence.
pub struct Dispatcher<P, R> {
    config: Config,
    prompter: P,
    runner: R,
    events: ChangeReceiver,
}

impl<P, R> Dispatcher<P, R>
where
    P: Prompter,
    R: CommandRunner,
{
    pub fn new(config: Config, prompter: P, runner: R, events: ChangeReceiver) -> Self {
        Self {
            config,
            prompter,
            runner,
            events,
        }
    }

    /// Main loop. Runs until shutdown is requested, then returns the config
    /// (including any policies resolved during the run) to the caller.
    pub async fn run(mut self) -> Result<Config> {
        info!("dispatcher started, waiting for file changes");

        loop {
            match self.events.pop().await {
                QueueEvent::PathChanged(path) => {
                    let outcome = self.dispatch(&path).await?;
                    debug!(path = %path, ?outcome, "dispatch finished");
                }
                QueueEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping dispatcher");
                    break;
                }
            }
        }

        Ok(self.config)
    }

    /// One full dispatch cycle for a changed path.
    pub async fn dispatch(&mut self, path: &str) -> Result<DispatchOutcome> {
        let policy = match self.config.paths.lookup(path) {
            Some(policy) => policy.clone(),
            None => self.config.paths.resolve(path, &mut self.prompter)?,
        };

        match policy {
            PathPolicy::Execute { cwd } => {
                info!(path = %path, "running command pipeline");
                run_pipeline(&mut self.runner, &self.config.commands, &cwd).await?;
                Ok(DispatchOutcome::Executed)
            }
            PathPolicy::Skip => {
                debug!(path = %path, "policy is skip, nothing to run");
                Ok(DispatchOutcome::Skipped)
            }
        }
    }

    /// Read access to the owned config, for tests asserting on resolved
    /// policies without finishing the loop.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
