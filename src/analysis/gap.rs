//! Gap analysis between a subject profile and a target profile

use super::profile::{AnalysisProfile, GapReport};
use crate::graph::{GraphSnapshot, SkillKey};
use indexmap::IndexSet;
use tracing::trace;

const ALIGNED_MESSAGE: &str = "Your seniority level aligns with the role requirements.";

const FOUNDATIONAL_NOTE: &str = " Note: You are targeting a Senior role or claim Senior experience, \
but your detected skills are primarily foundational. Consider acquiring specialized, high-authority skills.";

/// Compare `subject` against `target`.
///
/// Missing skills are the target's skills the subject lacks. Implicit skills are
/// graph neighbors of missing skills that the subject lacks and the target does
/// not already list. The seniority check flags targets rated above the subject,
/// and high-rated subjects whose skills include no senior node.
pub fn analyze_gap(subject: &AnalysisProfile, target: &AnalysisProfile, snapshot: &GraphSnapshot) -> GapReport {
    let missing_skills = target.skills.difference(&subject.skills);

    let mut implicit: IndexSet<&str> = IndexSet::new();
    for missing in &missing_skills {
        for incidence in snapshot.incident(&SkillKey::new(missing)) {
            let neighbor = incidence.neighbor;
            if subject.skills.contains_key(neighbor) || target.skills.contains_key(neighbor) {
                continue;
            }
            match snapshot.node_by_key(neighbor) {
                Some(node) => {
                    implicit.insert(node.id.as_str());
                }
                None => trace!("Skipping dangling implicit skill '{}'", neighbor),
            }
        }
    }

    let target_high = target.level.is_high();
    let subject_high = subject.level.is_high();

    let mut seniority_mismatch = false;
    let mut message = if target_high && !subject_high {
        seniority_mismatch = true;
        format!(
            "Role requires {} level, but your profile is rated as {}. \
             Focus on demonstrating leadership and advanced system design.",
            target.level, subject.level
        )
    } else {
        ALIGNED_MESSAGE.to_string()
    };

    if subject_high {
        let senior_skills = subject
            .skills
            .entries()
            .filter(|(key, _)| snapshot.node_by_key(key).is_some_and(|n| n.is_senior))
            .count();
        if senior_skills == 0 {
            seniority_mismatch = true;
            message.push_str(FOUNDATIONAL_NOTE);
        }
    }

    GapReport {
        missing_skills,
        implicit_skills: implicit.into_iter().map(str::to_string).collect(),
        seniority_mismatch,
        message,
    }
}
