//! Skill Graph Analysis Engine
//!
//! An in-memory skill taxonomy graph with hot reload, plus résumé and
//! job-description analysis on top of it.
//!
//! # Architecture
//!
//! - `graph`: immutable snapshots (nodes, links, hash indices) published through
//!   an atomically swapped reference; file watching for hot reload
//! - `matcher`: greedy longest-match skill extraction from free text
//! - `analysis`: subject/target profile strategies, bridge-skill
//!   recommendations and gap analysis
//! - `algo`: traversal over a dense view of the snapshot (BFS, components)
//! - `config`: YAML-loadable scoring and reload settings
//!
//! ## Example Usage
//!
//! ```rust
//! use skillgraph::{AnalysisRequest, Analyzer, EngineConfig, Level, SkillGraph};
//! use std::sync::Arc;
//!
//! let graph = Arc::new(SkillGraph::new());
//! graph.load(br#"{
//!     "nodes": [
//!         {"id": "Python", "seniorityScore": 0.3},
//!         {"id": "Machine Learning", "seniorityScore": 0.9, "isSenior": true},
//!         {"id": "Django", "seniorityScore": 0.3}
//!     ],
//!     "links": [
//!         {"source": "Python", "target": "Machine Learning", "value": 10},
//!         {"source": "Python", "target": "Django", "value": 5}
//!     ]
//! }"#).unwrap();
//!
//! let analyzer = Analyzer::new(graph, EngineConfig::default());
//! let profile = analyzer.analyze_subject(&AnalysisRequest::new("I write Python."));
//! assert_eq!(profile.level, Level::Junior);
//! assert_eq!(analyzer.suggest_bridges(&profile), vec!["Machine Learning", "Django"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod analysis;
pub mod config;
pub mod graph;
pub mod matcher;

// Re-export main types for convenience
pub use analysis::{
    AnalysisProfile, AnalysisRequest, AnalysisStrategy, Analyzer, GapReport, Level, ProfileKind,
};

pub use config::{ConfigError, ConfigResult, EngineConfig, ReloadConfig, ScoringConfig};

pub use graph::{
    FileSource, GraphSnapshot, GraphStatistics, SkillGraph, SkillKey, SkillLink, SkillNode,
    SnapshotError, SnapshotResult, SnapshotSource, SnapshotWatcher, WatchError, WatchHandle,
};

pub use matcher::{match_skills, SkillSet};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
