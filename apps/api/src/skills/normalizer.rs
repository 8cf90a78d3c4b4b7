//! Skill Set Normalizer — the single entry point for turning raw, externally
//! sourced skill names into a clean `SkillSet`.
//!
//! Rules:
//! - absent entries (`None`, JSON `null`) are dropped
//! - every entry is trimmed; entries empty after trimming are dropped
//! - non-string JSON values are converted to their string form first
//! - duplicates collapse (case-sensitive)
//!
//! Never fails. The worst case is an empty set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized, duplicate-free collection of skill names.
///
/// Only constructible through the normalizer functions below, so every element
/// is guaranteed trimmed and non-empty. Iteration order is lexicographic, which
/// keeps every derived list deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a list of present names. Shorthand for `normalize` with every
    /// element wrapped in `Some`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize(names.into_iter().map(Some))
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Deserializing always goes back through the normalizer.
impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        Ok(normalize_values(&raw))
    }
}

/// Normalizes a sequence of optional skill names.
pub fn normalize<I, S>(raw: I) -> SkillSet
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    SkillSet(
        raw.into_iter()
            .flatten()
            .filter_map(|s| clean_name(s.as_ref()))
            .collect(),
    )
}

/// Normalizes loosely typed input such as a JSON form submission.
///
/// `null` is dropped, strings are used as-is, anything else (numbers, booleans,
/// nested values) is rendered to its JSON text before trimming.
pub fn normalize_values(raw: &[Value]) -> SkillSet {
    normalize(raw.iter().map(value_to_name))
}

/// Trims a single name, returning `None` when nothing is left.
pub fn clean_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn value_to_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
