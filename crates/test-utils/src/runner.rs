use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use fw::exec::{CommandOutcome, CommandRunner};

/// A command runner that:
/// - records each command (and the cwd it would have run in) in order
/// - immediately reports a fixed outcome instead of spawning anything.
pub struct RecordingRunner {
    executed: Arc<Mutex<Vec<String>>>,
    cwds: Arc<Mutex<Vec<PathBuf>>>,
    outcome: CommandOutcome,
}

impl RecordingRunner {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            cwds: Arc::new(Mutex::new(Vec::new())),
            outcome: CommandOutcome::Success,
        }
    }

    /// Make every recorded command report this outcome.
    pub fn with_outcome(mut self, outcome: CommandOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Shared view of the working directories the commands were asked to
    /// run in, in order. Clone before moving the runner into a dispatcher.
    pub fn cwds_handle(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.cwds)
    }
}

impl CommandRunner for RecordingRunner {
    fn run_interactive(
        &mut self,
        command: String,
        cwd: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + '_>> {
        let executed = Arc::clone(&self.executed);
        let cwds = Arc::clone(&self.cwds);
        let outcome = self.outcome;

        Box::pin(async move {
            executed.lock().unwrap().push(command);
            cwds.lock().unwrap().push(cwd);
            Ok(outcome)
        })
    }
}
