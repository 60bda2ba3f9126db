// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `fw`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fw",
    version,
    about = "Watch a directory and run configured commands when files change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the persisted config file (TOML).
    ///
    /// Default: `.fw.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = crate::config::CONFIG_FILE_NAME)]
    pub config: String,

    /// Directory tree to watch for modifications.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
