//! Graph algorithms module
//!
//! Algorithms are implemented in the `skillgraph-algorithms` crate.
//! This module provides the integration/adapter layer between a snapshot's
//! string-keyed indices and the dense view the algorithms run on.

use crate::graph::SkillKey;
use rustc_hash::FxHashMap;
use skillgraph_algorithms::NodeIndex;

// Re-export algorithms
pub use skillgraph_algorithms::{
    bfs, connected_components, ComponentsResult, GraphView, PathResult,
};

/// Result of projecting a snapshot's links onto its node index
pub struct ViewBuild {
    pub view: GraphView,
    /// Links with at least one endpoint missing from the node index
    pub dangling: usize,
}

/// Build an undirected [`GraphView`] for algorithm execution.
///
/// `ends` holds each link's normalized `(source, target, value)` in link order.
/// Links whose endpoints are not both indexed are left out of the view and counted.
pub fn build_view<'a>(
    node_index: &FxHashMap<SkillKey, NodeIndex>,
    node_count: usize,
    ends: impl IntoIterator<Item = (&'a SkillKey, &'a SkillKey, i64)>,
) -> ViewBuild {
    let mut edges = Vec::new();
    let mut dangling = 0;

    for (source, target, value) in ends {
        match (node_index.get(source), node_index.get(target)) {
            (Some(&u), Some(&v)) => edges.push((u, v, value as f64)),
            _ => dangling += 1,
        }
    }

    ViewBuild {
        view: GraphView::from_edges(node_count, &edges),
        dangling,
    }
}
