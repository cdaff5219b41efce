//! Profile analysis over the active skill graph
//!
//! [`Analyzer`] is the request-facing entry point. Every call takes one snapshot
//! from the store and uses it throughout, so a concurrent reload never mixes
//! two graphs inside a single result.

pub mod bridge;
pub mod gap;
pub mod profile;
pub mod strategy;

pub use bridge::suggest_bridges;
pub use gap::analyze_gap;
pub use profile::{AnalysisProfile, AnalysisRequest, GapReport, Level, ProfileKind};
pub use strategy::{base_seniority_score, extract_years, numeric_level, AnalysisStrategy};

use crate::config::EngineConfig;
use crate::graph::{GraphSnapshot, SkillGraph};
use crate::matcher::{self, SkillSet};
use std::sync::Arc;
use tracing::debug;

/// Résumé and job-description analysis against a shared [`SkillGraph`]
#[derive(Debug, Clone)]
pub struct Analyzer {
    graph: Arc<SkillGraph>,
    config: EngineConfig,
}

impl Analyzer {
    pub fn new(graph: Arc<SkillGraph>, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &Arc<SkillGraph> {
        &self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a résumé or bio
    pub fn analyze_subject(&self, request: &AnalysisRequest) -> AnalysisProfile {
        self.analyze(AnalysisStrategy::Subject, request)
    }

    /// Analyze a job description
    pub fn analyze_target(&self, request: &AnalysisRequest) -> AnalysisProfile {
        self.analyze(AnalysisStrategy::Target, request)
    }

    /// Next skills to acquire for `profile`, most relevant first
    pub fn suggest_bridges(&self, profile: &AnalysisProfile) -> Vec<String> {
        let snapshot = self.graph.current();
        suggest_bridges(profile, &snapshot, &self.config.scoring)
    }

    pub fn analyze_gap(&self, subject: &AnalysisProfile, target: &AnalysisProfile) -> GapReport {
        let snapshot = self.graph.current();
        analyze_gap(subject, target, &snapshot)
    }

    fn analyze(&self, strategy: AnalysisStrategy, request: &AnalysisRequest) -> AnalysisProfile {
        // A blank job description has no requirements, whatever the overrides say
        if strategy == AnalysisStrategy::Target && request.text.trim().is_empty() {
            debug!("Nothing to analyze for blank job description");
            return AnalysisProfile::empty(ProfileKind::Target);
        }

        let snapshot = self.graph.current();
        let skills = match request.manual_skill_list() {
            Some(manual) => manual.iter().collect(),
            None => matcher::match_skills(&request.text, &snapshot),
        };

        self.build(strategy, request, skills, &snapshot)
    }

    fn build(
        &self,
        strategy: AnalysisStrategy,
        request: &AnalysisRequest,
        skills: SkillSet,
        snapshot: &GraphSnapshot,
    ) -> AnalysisProfile {
        let profile = strategy.analyze(request, skills, snapshot, &self.config.scoring);
        debug!(
            "{:?} profile: {} skills, {} years, score {:.2}, level {}",
            profile.kind,
            profile.skills.len(),
            profile.years_of_experience,
            profile.seniority_score,
            profile.level
        );
        profile
    }
}
