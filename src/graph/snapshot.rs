//! Immutable skill-graph snapshot with derived lookup indices
//!
//! A snapshot is built completely (nodes, links, `node_index`, `adjacency`,
//! traversal view) before anyone can observe it, and is never mutated after.
//! Hot reload replaces the whole snapshot; see [`super::store::SkillGraph`].

use super::store::{SnapshotError, SnapshotResult};
use super::types::{SkillKey, SkillLink, SkillNode};
use crate::algo::{self, GraphView};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Wire shape of a snapshot source: `{ "nodes": [...], "links": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub nodes: Vec<SkillNode>,
    #[serde(default)]
    pub links: Vec<SkillLink>,
}

/// Normalized endpoints of one link, aligned with `GraphSnapshot::links`
#[derive(Debug, Clone)]
struct LinkEnds {
    source: SkillKey,
    target: SkillKey,
}

/// A link incident to some skill, seen from that skill
#[derive(Debug, Clone, Copy)]
pub struct Incidence<'a> {
    pub link: &'a SkillLink,
    /// Key of the endpoint that is not the queried skill
    pub neighbor: &'a SkillKey,
}

/// Summary counters for a published snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub node_count: usize,
    pub link_count: usize,
    pub dangling_link_count: usize,
    pub component_count: usize,
    pub largest_component: usize,
    pub max_phrase_len: usize,
}

/// The active skill graph plus its derived indices
#[derive(Debug, Default)]
pub struct GraphSnapshot {
    nodes: Vec<SkillNode>,
    links: Vec<SkillLink>,
    link_ends: Vec<LinkEnds>,

    /// id (normalized) -> position in `nodes`
    node_index: FxHashMap<SkillKey, usize>,

    /// id (normalized) -> positions in `links` incident to it, in link order
    adjacency: FxHashMap<SkillKey, Vec<usize>>,

    /// Dense undirected view over indexed nodes for traversal algorithms
    view: GraphView,

    /// Greatest token count of any node id
    max_phrase_len: usize,

    dangling_links: usize,
}

impl GraphSnapshot {
    /// A snapshot with no nodes and no links
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw snapshot bytes (JSON) and build the indices
    pub fn from_slice(bytes: &[u8]) -> SnapshotResult<Self> {
        let data: SnapshotData = serde_json::from_slice(bytes)?;
        Self::from_data(data)
    }

    /// Validate and index already-decoded snapshot data
    pub fn from_data(data: SnapshotData) -> SnapshotResult<Self> {
        Self::build(data.nodes, data.links)
    }

    /// Build a snapshot from nodes and links, validating structure.
    pub fn build(nodes: Vec<SkillNode>, links: Vec<SkillLink>) -> SnapshotResult<Self> {
        let mut kept_nodes = Vec::with_capacity(nodes.len());
        let mut node_index = FxHashMap::default();
        node_index.reserve(nodes.len());
        let mut max_phrase_len = 0;

        for (position, mut node) in nodes.into_iter().enumerate() {
            let key = node.key();
            if key.is_empty() {
                return Err(SnapshotError::Malformed(format!(
                    "node #{} has a blank id",
                    position
                )));
            }
            if !node.seniority_score.is_finite() {
                return Err(SnapshotError::Malformed(format!(
                    "node '{}' has a non-finite seniorityScore",
                    node.id
                )));
            }
            node.seniority_score = node.seniority_score.clamp(0.0, 1.0);

            if node_index.contains_key(&key) {
                warn!("Duplicate skill id '{}' in snapshot; keeping first occurrence", node.id);
                continue;
            }

            max_phrase_len = max_phrase_len.max(key.token_count());
            node_index.insert(key, kept_nodes.len());
            kept_nodes.push(node);
        }

        let mut link_ends = Vec::with_capacity(links.len());
        let mut adjacency: FxHashMap<SkillKey, Vec<usize>> = FxHashMap::default();

        for (position, link) in links.iter().enumerate() {
            let source = SkillKey::new(&link.source);
            let target = SkillKey::new(&link.target);
            if source.is_empty() || target.is_empty() {
                return Err(SnapshotError::Malformed(format!(
                    "link #{} has a blank endpoint",
                    position
                )));
            }

            adjacency.entry(source.clone()).or_default().push(position);
            if target != source {
                adjacency.entry(target.clone()).or_default().push(position);
            }
            link_ends.push(LinkEnds { source, target });
        }

        let built = algo::build_view(
            &node_index,
            kept_nodes.len(),
            link_ends
                .iter()
                .zip(&links)
                .map(|(ends, link)| (&ends.source, &ends.target, link.value)),
        );
        if built.dangling > 0 {
            debug!("{} links reference skills missing from the node list", built.dangling);
        }

        Ok(GraphSnapshot {
            nodes: kept_nodes,
            links,
            link_ends,
            node_index,
            adjacency,
            view: built.view,
            max_phrase_len,
            dangling_links: built.dangling,
        })
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[SkillLink] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn dangling_link_count(&self) -> usize {
        self.dangling_links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Greatest token count of any skill id (0 for an empty graph)
    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }

    /// Case-insensitive node lookup
    pub fn node(&self, id: &str) -> Option<&SkillNode> {
        self.node_by_key(&SkillKey::new(id))
    }

    pub fn node_by_key(&self, key: &SkillKey) -> Option<&SkillNode> {
        self.node_index.get(key).map(|&i| &self.nodes[i])
    }

    /// Lookup for a phrase that is already normalized (lower-case, single-spaced)
    pub fn node_by_phrase(&self, phrase: &str) -> Option<&SkillNode> {
        self.node_index.get(phrase).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Links incident to `key` in link order, each paired with its opposite endpoint.
    ///
    /// Includes links whose opposite endpoint is not a known node; callers decide
    /// whether to skip those.
    pub fn incident<'a>(&'a self, key: &SkillKey) -> impl Iterator<Item = Incidence<'a>> + 'a {
        let positions = self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[]);
        let key = key.clone();
        positions.iter().map(move |&i| {
            let ends = &self.link_ends[i];
            let neighbor = if ends.source == key { &ends.target } else { &ends.source };
            Incidence {
                link: &self.links[i],
                neighbor,
            }
        })
    }

    /// Links incident to `id` (case-insensitive), in link order
    pub fn links_of(&self, id: &str) -> Vec<&SkillLink> {
        self.incident(&SkillKey::new(id)).map(|inc| inc.link).collect()
    }

    /// Skills one link away from `id` in either direction, by canonical id.
    ///
    /// Unknown ids have no neighbors; dangling link endpoints and self-loops are skipped.
    pub fn neighbors(&self, id: &str) -> IndexSet<String> {
        let Some(&idx) = self.node_index.get(&SkillKey::new(id)) else {
            return IndexSet::new();
        };
        self.view
            .neighbors(idx)
            .iter()
            .filter(|&&n| n != idx)
            .map(|&n| self.nodes[n].id.clone())
            .collect()
    }

    /// Breadth-first shortest path between two skills, by canonical id.
    ///
    /// `[start]` when both ids name the same skill; empty when either id is
    /// unknown or `end` is unreachable.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        let (Some(&s), Some(&t)) = (
            self.node_index.get(&SkillKey::new(start)),
            self.node_index.get(&SkillKey::new(end)),
        ) else {
            return Vec::new();
        };

        match algo::bfs(&self.view, s, t) {
            Some(result) => result
                .path
                .into_iter()
                .map(|i| self.nodes[i].id.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn statistics(&self) -> GraphStatistics {
        let components = algo::connected_components(&self.view);
        GraphStatistics {
            node_count: self.node_count(),
            link_count: self.link_count(),
            dangling_link_count: self.dangling_links,
            component_count: components.component_count,
            largest_component: components.largest_component_size(),
            max_phrase_len: self.max_phrase_len,
        }
    }
}
