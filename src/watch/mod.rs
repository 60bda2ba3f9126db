// src/watch/mod.rs

//! File watching.
//!
//! Thin adapter around the cross-platform `notify` watcher: raw filesystem
//! events come in, relative path strings go out onto the change queue. It
//! knows nothing about policies or commands.

pub mod watcher;

pub use watcher::{spawn_watcher, WatcherHandle};
