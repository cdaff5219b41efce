//! Core type definitions for the skill graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical, case-insensitive identity key for a skill.
///
/// Built once at ingestion: trimmed, internal whitespace collapsed to single
/// spaces, lower-cased. Two ids name the same skill iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillKey(String);

impl SkillKey {
    pub fn new(id: &str) -> Self {
        let mut key = String::with_capacity(id.len());
        for (i, word) in id.split_whitespace().enumerate() {
            if i > 0 {
                key.push(' ');
            }
            key.push_str(word);
        }
        SkillKey(key.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of whitespace-separated tokens in the key
    pub fn token_count(&self) -> usize {
        self.0.split(' ').filter(|t| !t.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets indices keyed by `SkillKey` be probed with an already-normalized `&str`.
impl Borrow<str> for SkillKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillKey {
    fn from(s: &str) -> Self {
        SkillKey::new(s)
    }
}

impl From<&String> for SkillKey {
    fn from(s: &String) -> Self {
        SkillKey::new(s)
    }
}

/// A skill in the graph.
///
/// `id` keeps the display casing of the source data; identity is [`SkillNode::key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: String,

    #[serde(default)]
    pub group: String,

    /// Prominence weight from the pipeline
    #[serde(default, rename = "val", alias = "weight")]
    pub weight: i64,

    /// Seniority signal in `[0, 1]`
    #[serde(default)]
    pub seniority_score: f64,

    #[serde(default)]
    pub is_senior: bool,
}

impl SkillNode {
    pub fn new(id: impl Into<String>) -> Self {
        SkillNode {
            id: id.into(),
            group: String::new(),
            weight: 0,
            seniority_score: 0.0,
            is_senior: false,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_seniority(mut self, score: f64, is_senior: bool) -> Self {
        self.seniority_score = score;
        self.is_senior = is_senior;
        self
    }

    pub fn key(&self) -> SkillKey {
        SkillKey::new(&self.id)
    }
}

/// A weighted, undirected relation between two skills.
///
/// Parallel links between the same pair are kept and aggregate independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLink {
    pub source: String,
    pub target: String,

    /// Co-occurrence / relation strength
    #[serde(default)]
    pub value: i64,

    #[serde(default)]
    pub seniority_score: f64,

    #[serde(default)]
    pub is_senior: bool,
}

impl SkillLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: i64) -> Self {
        SkillLink {
            source: source.into(),
            target: target.into(),
            value,
            seniority_score: 0.0,
            is_senior: false,
        }
    }
}
