//! Bridge-skill recommendation
//!
//! A bridge skill is one link away from something the subject already has,
//! and not yet owned. Candidates accumulate the values of every link that
//! reaches them; senior skills are boosted for subjects not yet rated Senior.

use super::profile::{AnalysisProfile, Level};
use crate::config::ScoringConfig;
use crate::graph::GraphSnapshot;
use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::trace;

/// Up to `config.max_bridges` bridge skills by canonical id, most relevant first.
///
/// Ties keep the order in which candidates were first reached.
pub fn suggest_bridges(
    profile: &AnalysisProfile,
    snapshot: &GraphSnapshot,
    config: &ScoringConfig,
) -> Vec<String> {
    let boost_senior = profile.level != Level::Senior;
    let mut candidates: IndexMap<&str, f64> = IndexMap::new();

    for (owned, _) in profile.skills.entries() {
        for incidence in snapshot.incident(owned) {
            if profile.skills.contains_key(incidence.neighbor) {
                continue;
            }
            let Some(node) = snapshot.node_by_key(incidence.neighbor) else {
                trace!("Skipping dangling bridge candidate '{}'", incidence.neighbor);
                continue;
            };

            let mut relevance = incidence.link.value as f64;
            if node.is_senior && boost_senior {
                relevance *= config.senior_bridge_multiplier;
            }
            *candidates.entry(node.id.as_str()).or_insert(0.0) += relevance;
        }
    }

    let mut ranked: Vec<(&str, f64)> = candidates.into_iter().collect();
    // Stable sort keeps first-reached order among equal scores
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(config.max_bridges)
        .map(|(id, _)| id.to_string())
        .collect()
}
