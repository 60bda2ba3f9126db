// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::policy::{PathPolicy, PolicyStore};

/// The in-memory configuration owned by the dispatcher for the whole
/// session: the command pipeline plus the per-path policy table.
///
/// Loaded once at startup, possibly revised by the interactive session
/// setup, persisted exactly once at shutdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Ordered list of shell commands to run on an "execute" dispatch.
    pub commands: Vec<String>,
    /// Remembered per-path decisions.
    pub paths: PolicyStore,
}

/// Top-level document as persisted to the config file.
///
/// ```toml
/// commands = ["cargo check", "cargo test"]
///
/// [paths."src/lib.rs"]
/// execute = true
/// cwd = "/home/user/project"
///
/// [paths."README.md"]
/// ```
///
/// A `paths` entry with no `execute` key is a remembered "skip".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub commands: Vec<String>,

    #[serde(default)]
    pub paths: BTreeMap<String, PathRecord>,
}

/// Wire form of one per-path decision.
///
/// `execute` is tri-state on the wire (true / false / absent); only
/// `execute = true` together with a `cwd` is an executable policy, every
/// other combination deserializes as skip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

impl From<&PathPolicy> for PathRecord {
    fn from(policy: &PathPolicy) -> Self {
        match policy {
            PathPolicy::Execute { cwd } => PathRecord {
                execute: Some(true),
                cwd: Some(cwd.display().to_string()),
            },
            PathPolicy::Skip => PathRecord {
                execute: None,
                cwd: None,
            },
        }
    }
}

impl From<PathRecord> for PathPolicy {
    fn from(record: PathRecord) -> Self {
        match (record.execute, record.cwd) {
            (Some(true), Some(cwd)) => PathPolicy::Execute {
                cwd: PathBuf::from(cwd),
            },
            // An executable record without a captured cwd is incomplete;
            // treat it like any other unusable persisted state.
            _ => PathPolicy::Skip,
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let entries = file
            .paths
            .into_iter()
            .map(|(path, record)| (path, PathPolicy::from(record)))
            .collect();
        Config {
            commands: file.commands,
            paths: PolicyStore::from_entries(entries),
        }
    }
}

impl From<&Config> for ConfigFile {
    fn from(config: &Config) -> Self {
        let paths = config
            .paths
            .iter()
            .map(|(path, policy)| (path.clone(), PathRecord::from(policy)))
            .collect();
        ConfigFile {
            commands: config.commands.clone(),
            paths,
        }
    }
}
