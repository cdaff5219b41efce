//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected graph topology.

/// Dense node index (position of the node in the owning snapshot)
pub type NodeIndex = usize;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `(u, v)` is stored twice, once in the row of `u` and once in the
/// row of `v`. Rows keep edge insertion order, so traversals that walk rows front to back
/// are deterministic for a fixed edge ordering.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<NodeIndex>,

    /// Edge weights: aligned with `targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// Build a view from an ordered undirected edge list.
    ///
    /// Edges referencing an index `>= node_count` are ignored.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex, f64)]) -> Self {
        let mut rows: Vec<Vec<(NodeIndex, f64)>> = vec![Vec::new(); node_count];

        for &(u, v, w) in edges {
            if u >= node_count || v >= node_count {
                continue;
            }
            rows[u].push((v, w));
            rows[v].push((u, w));
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(edges.len() * 2);
        let mut weights = Vec::with_capacity(edges.len() * 2);

        offsets.push(0);
        for row in rows {
            for (v, w) in row {
                targets.push(v);
                weights.push(w);
            }
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
            weights,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: NodeIndex) -> usize {
        if idx >= self.node_count {
            return 0;
        }
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get neighbors of a node, in edge insertion order. Unknown indices have none.
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        if idx >= self.node_count {
            return &[];
        }
        &self.targets[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Get weights aligned with [`GraphView::neighbors`]
    pub fn weights(&self, idx: NodeIndex) -> &[f64] {
        if idx >= self.node_count {
            return &[];
        }
        &self.weights[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Total number of stored (directed) adjacency entries
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }
}
