//! Connectivity analysis

use super::common::{GraphView, NodeIndex};

/// Result of a connected components pass
#[derive(Debug, Clone)]
pub struct ComponentsResult {
    /// Component id per node index
    pub node_component: Vec<usize>,
    /// Number of distinct components
    pub component_count: usize,
}

impl ComponentsResult {
    /// Size of the largest component (0 for an empty graph)
    pub fn largest_component_size(&self) -> usize {
        let mut sizes = vec![0usize; self.component_count];
        for &c in &self.node_component {
            sizes[c] += 1;
        }
        sizes.into_iter().max().unwrap_or(0)
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Connected components of the undirected view.
///
/// Component ids are assigned in order of each component's lowest node index.
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u in 0..n {
        for &v in view.neighbors(u) {
            uf.union(u, v);
        }
    }

    let mut root_to_component: Vec<Option<usize>> = vec![None; n];
    let mut node_component = Vec::with_capacity(n);
    let mut component_count = 0;

    for u in 0..n {
        let root: NodeIndex = uf.find(u);
        let id = match root_to_component[root] {
            Some(id) => id,
            None => {
                let id = component_count;
                root_to_component[root] = Some(id);
                component_count += 1;
                id
            }
        };
        node_component.push(id);
    }

    ComponentsResult {
        node_component,
        component_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        // 0-1-2   3-4   5
        let view = GraphView::from_edges(6, &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]);
        let result = connected_components(&view);

        assert_eq!(result.component_count, 3);
        assert_eq!(result.node_component, vec![0, 0, 0, 1, 1, 2]);
        assert_eq!(result.largest_component_size(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let result = connected_components(&GraphView::from_edges(0, &[]));
        assert_eq!(result.component_count, 0);
        assert_eq!(result.largest_component_size(), 0);
    }
}
