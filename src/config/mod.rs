// src/config/mod.rs

//! Configuration persistence for fw.
//!
//! Responsibilities:
//! - Define the TOML-backed wire model and the in-memory `Config` (`model.rs`).
//! - Load the config file at startup, defaulting to empty on absence or
//!   corruption, and save it at shutdown (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{load_or_default, save, CONFIG_FILE_NAME};
pub use model::{Config, ConfigFile, PathRecord};
