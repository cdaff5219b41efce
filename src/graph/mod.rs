//! Skill graph storage
//!
//! This module implements the skill taxonomy graph with:
//! - Skills as nodes keyed by a case-insensitive identity
//! - Weighted undirected links, parallel links kept
//! - Immutable snapshots with hash-based indices (`node_index`, `adjacency`)
//! - Atomic hot reload from an external snapshot source

pub mod snapshot;
pub mod store;
pub mod types;
pub mod watch;

// Re-export main types
pub use snapshot::{GraphSnapshot, GraphStatistics, Incidence, SnapshotData};
pub use store::{FileSource, SkillGraph, SnapshotError, SnapshotResult, SnapshotSource};
pub use types::{SkillKey, SkillLink, SkillNode};
pub use watch::{SnapshotWatcher, WatchError, WatchHandle};
