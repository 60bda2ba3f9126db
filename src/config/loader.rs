// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::model::{Config, ConfigFile};

/// Well-known config file name in the current working directory.
pub const CONFIG_FILE_NAME: &str = ".fw.toml";

/// Load the persisted config, substituting the empty default when the file
/// is absent or unreadable as TOML.
///
/// A broken config file is deliberately not an error: the tool starts from
/// scratch and the operator re-enters commands interactively.
pub fn load_or_default(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(?path, %err, "no config file, starting from an empty config");
            return Config::default();
        }
    };

    match toml::from_str::<ConfigFile>(&contents) {
        Ok(file) => Config::from(file),
        Err(err) => {
            warn!(?path, %err, "config file is malformed, starting from an empty config");
            Config::default()
        }
    }
}

/// Persist the config. Called exactly once, at shutdown.
///
/// Unlike loading, a failed save is a real error and propagates.
pub fn save(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let file = ConfigFile::from(config);
    let contents = toml::to_string_pretty(&file).context("serializing config to TOML")?;
    fs::write(path, contents).with_context(|| format!("writing config file at {path:?}"))?;
    Ok(())
}
