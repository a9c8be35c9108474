//! Filesystem change watcher driving per-event analysis.
//!
//! Backed by `notify`'s recommended OS watcher. Events are forwarded
//! into a tokio channel; each create/modify event that passes the
//! collector's filter rules spawns an independent analysis task. There
//! is no queue and no dedup: rapid successive saves of the same file
//! may trigger overlapping analyses.

use std::path::Path;
use std::sync::Arc;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::analyzer::FileAnalyzer;
use crate::models::WatchFilter;
use crate::output;

/// Errors while starting the watcher.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("failed to start file watcher: {0}")]
    Notify(#[from] notify::Error),
}

/// The event kinds the watcher reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
}

/// Map a `notify` event kind to ours, dropping everything but
/// creations and modifications (access events, removals, ...).
fn map_event_kind(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Created),
        EventKind::Modify(_) => Some(ChangeKind::Modified),
        _ => None,
    }
}

/// Handle on a running watch.
///
/// Owns the OS watcher and the dispatch task; dropping or stopping it
/// tears both down, which is what tests use for clean teardown. In
/// normal operation the handle lives until process termination.
pub struct WatchHandle {
    watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Stop watching and cancel the dispatch task.
    pub fn stop(self) {
        drop(self.watcher);
        self.task.abort();
    }
}

/// Start watching `root` recursively.
///
/// Each matching event triggers `analyzer.analyze` on its own spawned
/// task, concurrent with any analyses already in flight.
pub fn start(
    root: &Path,
    filter: WatchFilter,
    analyzer: Arc<FileAnalyzer>,
) -> Result<WatchHandle, WatchError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<notify::Result<notify::Event>>();

    let mut watcher = notify::recommended_watcher(move |res| {
        // The receiver disappearing just means we are shutting down.
        let _ = tx.send(res);
    })?;
    watcher.watch(root, RecursiveMode::Recursive)?;

    let task = tokio::spawn(async move {
        while let Some(res) = rx.recv().await {
            let event = match res {
                Ok(e) => e,
                Err(e) => {
                    output::print_warning(&format!("watch error: {e}"));
                    continue;
                }
            };

            if map_event_kind(&event.kind).is_none() {
                continue;
            }

            for path in event.paths {
                if !path.is_file() {
                    continue;
                }
                let size = match std::fs::metadata(&path) {
                    Ok(m) => m.len(),
                    Err(_) => continue,
                };
                if !filter.allows(&path, size) {
                    continue;
                }

                let analyzer = Arc::clone(&analyzer);
                tokio::spawn(async move {
                    analyzer.analyze(&path).await;
                });
            }
        }
    });

    Ok(WatchHandle { watcher, task })
}
