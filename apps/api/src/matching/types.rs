use serde::{Deserialize, Serialize};

use crate::skills::normalizer::{clean_name, SkillSet};

/// Weight used when a requirement edge carries no explicit weight.
pub const DEFAULT_REQUIREMENT_WEIGHT: f64 = 1.0;

/// One weighted skill requirement of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub skill: String,
    pub weight: f64,
}

/// The weighted skill requirements of a single job.
///
/// Keeps encounter order (tie-breaks downstream depend on it). Skill names are
/// normalized on insert; a repeated name keeps its first position and takes the
/// later weight. Negative or non-finite weights are stored as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightedRequirement {
    entries: Vec<Requirement>,
}

impl WeightedRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from raw `(name, weight)` rows as they come out of storage.
    /// Rows with an absent or blank name are dropped; an absent weight becomes
    /// `DEFAULT_REQUIREMENT_WEIGHT`.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Option<S>, Option<f64>)>,
        S: AsRef<str>,
    {
        let mut req = Self::new();
        for (name, weight) in rows {
            if let Some(name) = name {
                req.insert(name.as_ref(), weight.unwrap_or(DEFAULT_REQUIREMENT_WEIGHT));
            }
        }
        req
    }

    /// Builds from present names and weights.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self::from_rows(pairs.into_iter().map(|(s, w)| (Some(s), Some(w))))
    }

    pub fn insert(&mut self, name: &str, weight: f64) {
        let Some(skill) = clean_name(name) else {
            return;
        };
        let weight = if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        };
        match self.entries.iter_mut().find(|r| r.skill == skill) {
            Some(existing) => existing.weight = weight,
            None => self.entries.push(Requirement { skill, weight }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    pub fn weight_of(&self, skill: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|r| r.skill == skill)
            .map(|r| r.weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|r| r.weight).sum()
    }

    pub fn max_weight(&self) -> f64 {
        self.entries.iter().map(|r| r.weight).fold(0.0, f64::max)
    }

    /// Sum of the weights of required skills the person owns.
    pub fn owned_weight(&self, person: &SkillSet) -> f64 {
        self.entries
            .iter()
            .filter(|r| person.contains(&r.skill))
            .map(|r| r.weight)
            .sum()
    }

    /// Splits the required skills into `(owned, missing)`, both in encounter order.
    pub fn partition(&self, person: &SkillSet) -> (Vec<&Requirement>, Vec<&Requirement>) {
        self.entries.iter().partition(|r| person.contains(&r.skill))
    }
}

/// A job posting with its weighted skill requirements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub requirements: WeightedRequirement,
}

/// A job listing row without requirements, used by catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub name: String,
    pub city: String,
}

/// Counts across the whole skill graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub job_count: i64,
    pub skill_count: i64,
    pub rel_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_drop_blank_names_and_default_weight() {
        let req = WeightedRequirement::from_rows(vec![
            (Some("Rust"), Some(3.0)),
            (None, Some(9.0)),
            (Some("  "), Some(2.0)),
            (Some(" SQL "), None),
        ]);
        assert_eq!(req.len(), 2);
        assert_eq!(req.weight_of("SQL"), Some(DEFAULT_REQUIREMENT_WEIGHT));
    }

    #[test]
    fn test_repeated_name_keeps_first_position() {
        let req = WeightedRequirement::from_pairs([("A", 1.0), ("B", 2.0), ("A", 5.0)]);
        let names: Vec<_> = req.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(req.weight_of("A"), Some(5.0));
    }

    #[test]
    fn test_negative_weight_clamped_to_zero() {
        let req = WeightedRequirement::from_pairs([("A", -4.0), ("B", f64::NAN)]);
        assert_eq!(req.total_weight(), 0.0);
    }

    #[test]
    fn test_partition_preserves_encounter_order() {
        let req = WeightedRequirement::from_pairs([("C", 1.0), ("A", 1.0), ("B", 1.0)]);
        let person = SkillSet::from_names(["B", "C"]);
        let (owned, missing) = req.partition(&person);
        let owned: Vec<_> = owned.iter().map(|r| r.skill.as_str()).collect();
        let missing: Vec<_> = missing.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(owned, vec!["C", "B"]);
        assert_eq!(missing, vec!["A"]);
    }
}
