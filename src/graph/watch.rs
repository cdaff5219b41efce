//! Snapshot file watcher
//!
//! Turns file-system change notifications for the snapshot file into debounced
//! reloads of a [`SkillGraph`]. A single logical update usually arrives as a burst
//! of create/modify/rename events; the background task waits `debounce` after the
//! first event, drains whatever else queued up, and reloads once.

use super::store::{FileSource, SkillGraph};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Errors raised while setting up a watch
#[derive(Error, Debug)]
pub enum WatchError {
    /// The platform watcher could not be created or attached
    #[error("File watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// The snapshot path has no file name to match events against
    #[error("Not a file path: {0}")]
    InvalidPath(PathBuf),
}

/// Keeps a watch alive; dropping it stops watching and ends the reload task.
pub struct WatchHandle {
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Stop watching
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Watches one snapshot file and reloads the graph when it changes
pub struct SnapshotWatcher;

impl SnapshotWatcher {
    /// Start watching `source`. Must be called from within a Tokio runtime.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors and pipelines that replace the file by rename are still seen.
    pub fn spawn(
        graph: Arc<SkillGraph>,
        source: FileSource,
        debounce: Duration,
    ) -> Result<WatchHandle, WatchError> {
        let path = source.path().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| WatchError::InvalidPath(path.clone()))?;
        let dir = watch_dir(&path);

        let (tx, rx) = unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_content_change(&event.kind)
                    && event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    // Receiver gone means the handle was dropped; nothing to do.
                    let _ = tx.send(());
                }
            }
            Err(e) => error!("Snapshot watcher error: {}", e),
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        info!("Watching {} for skill graph changes", path.display());
        let task = tokio::spawn(reload_loop(graph, source, rx, debounce));

        Ok(WatchHandle {
            _watcher: watcher,
            task,
        })
    }
}

async fn reload_loop(
    graph: Arc<SkillGraph>,
    source: FileSource,
    mut events: UnboundedReceiver<()>,
    debounce: Duration,
) {
    while events.recv().await.is_some() {
        tokio::time::sleep(debounce).await;

        let mut coalesced = 0usize;
        while events.try_recv().is_ok() {
            coalesced += 1;
        }
        debug!("Snapshot change detected ({} extra events coalesced)", coalesced);

        let graph = Arc::clone(&graph);
        let source = source.clone();
        // reload_from logs and degrades on failure; the result is only informational here
        match tokio::task::spawn_blocking(move || graph.reload_from(&source).map(|_| ())).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!("Reload finished degraded: {}", e),
            Err(e) => error!("Reload task failed: {}", e),
        }
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    )
}
