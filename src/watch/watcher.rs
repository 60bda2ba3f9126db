// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::info;

use crate::engine::ChangeSender;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching, which is
/// the first phase of shutdown.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher on `root` (recursively) that pushes every
/// modified path, relativized against `root`, onto the change queue.
///
/// The notify callback only ever does that one non-blocking push; all
/// decisions happen on the dispatcher side. Event coalescing or debouncing
/// is deliberately absent: every notification becomes one queue entry.
pub fn spawn_watcher(root: impl Into<PathBuf>, queue: ChangeSender) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    let callback_root = root.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) if event.kind.is_modify() => {
                for path in &event.paths {
                    if let Some(rel) = relative_str(&callback_root, path) {
                        queue.push(rel);
                    }
                }
            }
            Ok(_) => {} // creates/removes are the watcher backend's concern
            Err(err) => {
                eprintln!("fw: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("file watcher started on {:?}", root);

    Ok(WatcherHandle { _inner: watcher })
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root` and cannot be relativized.
fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_str_strips_root_and_normalizes_separators() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/app.go");
        assert_eq!(relative_str(root, path), Some("src/app.go".to_string()));
    }

    #[test]
    fn relative_str_rejects_paths_outside_root() {
        let root = Path::new("/project");
        let path = Path::new("/elsewhere/file.txt");
        assert_eq!(relative_str(root, path), None);
    }
}
