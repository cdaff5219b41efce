//! Hot-reloadable skill graph store
//!
//! Holds exactly one published [`GraphSnapshot`] behind an `Arc`. Readers clone
//! the `Arc` and work lock-free from there; a reload builds the next snapshot
//! off to the side and swaps the pointer. In-flight readers keep the snapshot
//! they started with.

use super::snapshot::GraphSnapshot;
use arc_swap::ArcSwap;
use indexmap::IndexSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while reading or validating a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot source could not be read
    #[error("I/O error reading snapshot: {0}")]
    Io(#[from] io::Error),

    /// The bytes are not a valid snapshot document
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but failed structural validation
    #[error("Malformed snapshot: {0}")]
    Malformed(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Anything a snapshot can be (re)read from on demand
pub trait SnapshotSource: Send + Sync {
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// Snapshot stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSource {
    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The process-wide skill graph
#[derive(Debug)]
pub struct SkillGraph {
    active: ArcSwap<GraphSnapshot>,
    generation: AtomicU64,
}

impl SkillGraph {
    /// Create a store whose active snapshot is empty
    pub fn new() -> Self {
        Self::with_snapshot(GraphSnapshot::empty())
    }

    /// Create a store with a prebuilt snapshot already published
    pub fn with_snapshot(snapshot: GraphSnapshot) -> Self {
        SkillGraph {
            active: ArcSwap::from_pointee(snapshot),
            generation: AtomicU64::new(0),
        }
    }

    /// The active snapshot. Never blocks on a reload in progress.
    pub fn current(&self) -> Arc<GraphSnapshot> {
        self.active.load_full()
    }

    /// Number of snapshots published since construction
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Publish a fully built snapshot
    pub fn publish(&self, snapshot: GraphSnapshot) -> Arc<GraphSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.active.store(Arc::clone(&snapshot));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        info!(
            "Published skill graph generation {}: {} nodes, {} links",
            generation,
            snapshot.node_count(),
            snapshot.link_count()
        );
        snapshot
    }

    /// Parse `bytes` and publish the result.
    ///
    /// On any failure the empty snapshot is published instead, so the service
    /// keeps answering with a degraded graph; the error is returned for reporting.
    pub fn load(&self, bytes: &[u8]) -> SnapshotResult<Arc<GraphSnapshot>> {
        match GraphSnapshot::from_slice(bytes) {
            Ok(snapshot) => Ok(self.publish(snapshot)),
            Err(e) => {
                warn!("Falling back to an empty skill graph: {}", e);
                self.publish(GraphSnapshot::empty());
                Err(e)
            }
        }
    }

    /// Re-read `source` and publish it, degrading to empty on failure
    pub fn reload_from(&self, source: &dyn SnapshotSource) -> SnapshotResult<Arc<GraphSnapshot>> {
        info!("Loading skill graph from {}", source.describe());
        match source.read() {
            Ok(bytes) => self.load(&bytes),
            Err(e) => {
                warn!("Cannot read {}; falling back to an empty skill graph: {}", source.describe(), e);
                self.publish(GraphSnapshot::empty());
                Err(e.into())
            }
        }
    }

    /// One-hop neighbors on the active snapshot
    pub fn neighbors(&self, id: &str) -> IndexSet<String> {
        self.current().neighbors(id)
    }

    /// Shortest path on the active snapshot
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        self.current().shortest_path(start, end)
    }
}

impl Default for SkillGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPH: &[u8] = br#"{
        "nodes": [{"id": "Python"}, {"id": "Django"}],
        "links": [{"source": "Python", "target": "Django", "value": 5}]
    }"#;

    struct FailingSource;

    impl SnapshotSource for FailingSource {
        fn read(&self) -> io::Result<Vec<u8>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let graph = SkillGraph::new();
        assert!(graph.current().is_empty());
        assert_eq!(graph.generation(), 0);
    }

    #[test]
    fn test_load_publishes() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();
        assert_eq!(graph.current().node_count(), 2);
        assert_eq!(graph.generation(), 1);
        assert!(graph.neighbors("python").contains("Django"));
        assert_eq!(graph.shortest_path("django", "python"), vec!["Django", "Python"]);
    }

    #[test]
    fn test_malformed_load_degrades_to_empty() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();

        let err = graph.load(b"[1, 2").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
        assert!(graph.current().is_empty());
        assert_eq!(graph.generation(), 2);
    }

    #[test]
    fn test_unreadable_source_degrades_to_empty() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();

        let err = graph.reload_from(&FailingSource).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
        assert!(graph.current().is_empty());
    }

    #[test]
    fn test_readers_keep_their_snapshot_across_reload() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();

        let before = graph.current();
        graph.load(br#"{"nodes": [{"id": "Rust"}]}"#).unwrap();

        assert_eq!(before.node_count(), 2);
        assert!(before.node("django").is_some());
        assert_eq!(graph.current().node_count(), 1);
    }

    #[test]
    fn test_current_is_stable_without_reload() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();
        let a = graph.current();
        let b = graph.current();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_retired_snapshot_released_after_readers_drop() {
        let graph = SkillGraph::new();
        graph.load(GRAPH).unwrap();

        let before = graph.current();
        graph.load(br#"{"nodes": [{"id": "Rust"}]}"#).unwrap();
        assert_eq!(Arc::strong_count(&before), 1);
        assert!(!Arc::ptr_eq(&before, &graph.current()));
    }

    #[test]
    fn test_concurrent_readers_see_whole_snapshots() {
        let graph = Arc::new(SkillGraph::new());
        graph.load(GRAPH).unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let graph = Arc::clone(&graph);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let snapshot = graph.current();
                        let count = snapshot.node_count();
                        assert!(count == 1 || count == 2);
                        assert_eq!(snapshot.node("django").is_some(), count == 2);
                    }
                })
            })
            .collect();

        for i in 0..100 {
            if i % 2 == 0 {
                graph.load(br#"{"nodes": [{"id": "Rust"}]}"#).unwrap();
            } else {
                graph.load(GRAPH).unwrap();
            }
        }
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(graph.generation(), 101);
    }
}
