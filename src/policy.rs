// src/policy.rs

//! Per-path execution policies.
//!
//! The [`PolicyStore`] remembers, for every path that has ever been seen
//! changing, whether the command pipeline should run for it. Unknown paths
//! are resolved interactively exactly once and the answer is kept for the
//! rest of the session (and persisted at shutdown via the config layer).

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::prompt::{prompt_until_valid, Prompter};

/// The cached decision for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPolicy {
    /// Run the command pipeline, with `cwd` as the working directory. The
    /// directory is captured at the moment the operator answered "y".
    Execute { cwd: PathBuf },
    /// Never run the pipeline for this path.
    Skip,
}

impl PathPolicy {
    pub fn is_execute(&self) -> bool {
        matches!(self, PathPolicy::Execute { .. })
    }
}

/// Table of per-path policies, keyed by the relative path string exactly as
/// reported by the watcher. No normalization beyond that is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyStore {
    entries: BTreeMap<String, PathPolicy>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from persisted entries at startup.
    pub fn from_entries(entries: BTreeMap<String, PathPolicy>) -> Self {
        Self { entries }
    }

    /// Pure read; never prompts.
    pub fn lookup(&self, path: &str) -> Option<&PathPolicy> {
        self.entries.get(path)
    }

    pub fn insert(&mut self, path: impl Into<String>, policy: PathPolicy) {
        self.entries.insert(path.into(), policy);
    }

    /// Resolve the policy for an unknown path by asking the operator.
    ///
    /// Only `y` and `n` are accepted; anything else (including an empty
    /// line) re-asks. A `y` captures the process's current working
    /// directory into the policy. The answer is stored before returning.
    ///
    /// Must only be called from the dispatcher: it blocks on interactive
    /// input.
    pub fn resolve<P>(&mut self, path: &str, prompter: &mut P) -> Result<PathPolicy>
    where
        P: Prompter + ?Sized,
    {
        let question =
            format!("Unknown file changed: {path}\nRun commands for this path (y/n): ");
        let execute = prompt_until_valid(prompter, &question, |answer| match answer {
            "y" => Some(true),
            "n" => Some(false),
            _ => None,
        })?;

        let policy = if execute {
            let cwd = env::current_dir().context("capturing working directory for policy")?;
            PathPolicy::Execute { cwd }
        } else {
            PathPolicy::Skip
        };

        debug!(path = %path, execute, "resolved policy for new path");
        self.entries.insert(path.to_string(), policy.clone());
        Ok(policy)
    }

    /// Whole-table reset, used by the startup "Reset paths?" prompt.
    pub fn reset_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathPolicy)> {
        self.entries.iter()
    }
}
