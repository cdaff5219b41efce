//! Analysis inputs and outputs

use crate::matcher::SkillSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete seniority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Junior,
    Mid,
    Senior,
    Managerial,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "Junior",
            Level::Mid => "Mid",
            Level::Senior => "Senior",
            Level::Managerial => "Managerial",
        }
    }

    /// Senior or Managerial
    pub fn is_high(&self) -> bool {
        matches!(self, Level::Senior | Level::Managerial)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a profile was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProfileKind {
    /// A person's résumé or bio
    #[default]
    Subject,
    /// A job description
    Target,
}

/// Raw input for one analysis call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub text: String,
    /// Replaces text matching entirely when non-empty
    #[serde(default)]
    pub manual_skills: Option<Vec<String>>,
    /// Replaces years extraction when present
    #[serde(default)]
    pub manual_years: Option<u32>,
    /// Extra context considered for score boosts and level keywords
    #[serde(default)]
    pub additional_details: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        AnalysisRequest {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_manual_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.manual_skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_manual_years(mut self, years: u32) -> Self {
        self.manual_years = Some(years);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.additional_details = Some(details.into());
        self
    }

    /// Manual skill list, if one was supplied and is non-empty
    pub fn manual_skill_list(&self) -> Option<&[String]> {
        self.manual_skills.as_deref().filter(|s| !s.is_empty())
    }

    /// Lower-cased text plus additional details, used for keyword cues
    pub fn context_text(&self) -> String {
        let mut context = self.text.to_lowercase();
        if let Some(details) = &self.additional_details {
            context.push('\n');
            context.push_str(&details.to_lowercase());
        }
        context
    }
}

/// Analyzed résumé or job description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisProfile {
    pub skills: SkillSet,
    pub years_of_experience: u32,
    /// In `[0, 1]`
    pub seniority_score: f64,
    pub level: Level,
    pub kind: ProfileKind,
}

impl AnalysisProfile {
    /// "Nothing to analyze": no skills, score 0, Junior
    pub fn empty(kind: ProfileKind) -> Self {
        AnalysisProfile {
            kind,
            ..Default::default()
        }
    }

    /// Hand-built profile, mainly for callers that already know the skill set
    pub fn with_skills<S: AsRef<str>>(kind: ProfileKind, level: Level, skills: impl IntoIterator<Item = S>) -> Self {
        AnalysisProfile {
            skills: skills.into_iter().collect(),
            level,
            kind,
            ..Default::default()
        }
    }
}

/// Outcome of comparing a subject profile against a target profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub missing_skills: Vec<String>,
    pub implicit_skills: Vec<String>,
    pub seniority_mismatch: bool,
    pub message: String,
}
