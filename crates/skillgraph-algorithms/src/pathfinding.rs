//! Pathfinding algorithms

use super::common::{GraphView, NodeIndex};
use std::collections::VecDeque;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub path: Vec<NodeIndex>,
    pub cost: f64,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Neighbors are enqueued in row order, so among equal-length paths the one
/// through the first-enqueued neighbor wins.
pub fn bfs(view: &GraphView, source: NodeIndex, target: NodeIndex) -> Option<PathResult> {
    if source >= view.node_count || target >= view.node_count {
        return None;
    }

    let mut queue = VecDeque::new();
    let mut parent: Vec<Option<NodeIndex>> = vec![None; view.node_count];
    let mut visited = vec![false; view.node_count];

    queue.push_back(source);
    visited[source] = true;

    while let Some(current) = queue.pop_front() {
        if current == target {
            // Reconstruct path
            let mut path = vec![target];
            let mut curr = parent[target];
            while let Some(idx) = curr {
                path.push(idx);
                curr = parent[idx];
            }
            path.reverse();
            return Some(PathResult {
                source,
                target,
                cost: (path.len() - 1) as f64,
                path,
            });
        }

        for &next in view.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}
