//! Insertion-ordered, case-insensitive set of skill ids

use crate::graph::SkillKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A set of skill ids compared by [`SkillKey`].
///
/// The first spelling inserted for a key is the one reported back.
/// Serializes as a plain list of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    entries: IndexMap<SkillKey, String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`; returns false if an equivalent id was already present.
    /// Blank ids are ignored.
    pub fn insert(&mut self, id: &str) -> bool {
        let key = SkillKey::new(id);
        if key.is_empty() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, id.trim().to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(&SkillKey::new(id))
    }

    pub fn contains_key(&self, key: &SkillKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// `(key, id)` pairs in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&SkillKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Ids of `self` not present in `other`, in `self`'s order
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(key, _)| !other.contains_key(key))
            .map(|(_, id)| id.clone())
            .collect()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.values().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for id in iter {
            set.insert(id.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.entries.into_values().collect()
    }
}
