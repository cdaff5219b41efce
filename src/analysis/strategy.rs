//! Profile-building strategies
//!
//! Both variants share one skeleton (years, base score, level) and differ only
//! in the score boost and the keyword cues that can short-circuit the level.

use super::profile::{AnalysisProfile, AnalysisRequest, Level, ProfileKind};
use crate::config::ScoringConfig;
use crate::graph::GraphSnapshot;
use crate::matcher::SkillSet;
use regex::Regex;
use std::sync::LazyLock;

static YEARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\+?\s*(?:years|yrs|year)").expect("years pattern"));

static LEADERSHIP_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:architected|designed|led|managed|headed|founded|orchestrated)\b")
        .expect("leadership pattern")
});

static TITLE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:senior|principal|staff|lead)\b").expect("title pattern"));

// Level cues are plain substring checks on the lower-cased context.
const SUBJECT_SENIOR_CUES: &[&str] = &["senior", "principal", "staff", "architect", "lead"];
const TARGET_MANAGERIAL_CUES: &[&str] = &["manager", "director", "head of", "vp", "chief", "leadership"];
const TARGET_SENIOR_CUES: &[&str] = &["senior", "lead", "principal", "architect", "staff"];
const TARGET_JUNIOR_CUES: &[&str] = &["junior", "entry level", "intern"];

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

/// Largest plausible "N years" / "N+ yrs" figure in `text`, or 0.
///
/// Values at or above `max_plausible` are discarded as noise.
pub fn extract_years(text: &str, max_plausible: u32) -> u32 {
    let lowered = text.to_lowercase();
    YEARS_PATTERN
        .captures_iter(&lowered)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .filter(|&years| years < max_plausible)
        .max()
        .unwrap_or(0)
}

/// Mean `seniorityScore` of the skills found in the node index.
///
/// `None` when none of the skills is a known node.
pub fn base_seniority_score(skills: &SkillSet, snapshot: &GraphSnapshot) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;
    for (key, _) in skills.entries() {
        if let Some(node) = snapshot.node_by_key(key) {
            total += node.seniority_score;
            count += 1;
        }
    }
    (count > 0).then(|| total / count as f64)
}

/// Shared numeric fallback used when no keyword cue decides the level
pub fn numeric_level(years: u32, score: f64, config: &ScoringConfig) -> Level {
    if years >= config.senior_years || score > config.senior_score {
        Level::Senior
    } else if years >= config.mid_years || score > config.mid_score {
        Level::Mid
    } else {
        Level::Junior
    }
}

/// The two profile-building variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStrategy {
    /// Résumé / bio analysis
    Subject,
    /// Job-description analysis
    Target,
}

impl AnalysisStrategy {
    pub fn kind(&self) -> ProfileKind {
        match self {
            AnalysisStrategy::Subject => ProfileKind::Subject,
            AnalysisStrategy::Target => ProfileKind::Target,
        }
    }

    /// Build a profile from an already-resolved skill set
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        skills: SkillSet,
        snapshot: &GraphSnapshot,
        config: &ScoringConfig,
    ) -> AnalysisProfile {
        let years = request
            .manual_years
            .unwrap_or_else(|| extract_years(&request.text, config.max_plausible_years));

        let context = request.context_text();
        let seniority_score = match base_seniority_score(&skills, snapshot) {
            Some(base) => (base + self.score_boost(&context, config)).clamp(0.0, 1.0),
            None => 0.0,
        };

        let level = self
            .keyword_level(&context)
            .unwrap_or_else(|| numeric_level(years, seniority_score, config));

        AnalysisProfile {
            skills,
            years_of_experience: years,
            seniority_score,
            level,
            kind: self.kind(),
        }
    }

    fn score_boost(&self, context: &str, config: &ScoringConfig) -> f64 {
        match self {
            AnalysisStrategy::Subject => {
                if LEADERSHIP_VERBS.is_match(context) {
                    config.leadership_boost
                } else if TITLE_WORDS.is_match(context) {
                    config.title_boost
                } else {
                    0.0
                }
            }
            AnalysisStrategy::Target => 0.0,
        }
    }

    fn keyword_level(&self, context: &str) -> Option<Level> {
        match self {
            AnalysisStrategy::Subject => {
                // "lead" is ambiguous ("lead developer" vs "I lead a team") but still reads as senior
                contains_any(context, SUBJECT_SENIOR_CUES).then_some(Level::Senior)
            }
            AnalysisStrategy::Target => {
                if contains_any(context, TARGET_MANAGERIAL_CUES) {
                    Some(Level::Managerial)
                } else if contains_any(context, TARGET_SENIOR_CUES) {
                    Some(Level::Senior)
                } else if contains_any(context, TARGET_JUNIOR_CUES) {
                    Some(Level::Junior)
                } else {
                    None
                }
            }
        }
    }
}
