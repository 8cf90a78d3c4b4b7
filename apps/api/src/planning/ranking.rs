//! Catalog ranking. Top job recommendations across the whole catalog.

use serde::{Deserialize, Serialize};

use crate::matching::types::Job;
use crate::matching::weighted_rate;
use crate::skills::normalizer::SkillSet;

/// Maximum number of recommendations returned.
pub const TOP_N: usize = 5;

/// Substituted for a person with no recorded skills so the ranking is not
/// uniformly zero. Applies to ranking only; direct scoring never uses it.
pub const DEFAULT_SKILLS: [&str; 2] = ["Python", "SQL"];

/// Shown when a job has no city on record.
pub const UNKNOWN_CITY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_id: String,
    pub job_name: String,
    pub city: String,
    pub match_rate: u32, // 0 – 100
    pub overlap_skills: Vec<String>,
}

/// Ranks every catalog job by weighted match rate, descending, top `TOP_N`.
///
/// Jobs without valid requirements stay in with rate 0. Ties keep catalog order.
pub fn rank(person: &SkillSet, catalog: &[Job]) -> Vec<JobRecommendation> {
    let defaulted;
    let person = if person.is_empty() {
        defaulted = SkillSet::from_names(DEFAULT_SKILLS);
        &defaulted
    } else {
        person
    };

    let mut recommendations: Vec<JobRecommendation> = catalog
        .iter()
        .map(|job| {
            let requirements = &job.requirements;
            let overlap_skills = person
                .iter()
                .filter(|skill| requirements.weight_of(skill).is_some())
                .map(str::to_string)
                .collect();

            JobRecommendation {
                job_id: job.id.clone(),
                job_name: job.name.clone(),
                city: job
                    .city
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_CITY.to_string()),
                match_rate: weighted_rate(
                    requirements.owned_weight(person),
                    requirements.total_weight(),
                ),
                overlap_skills,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.match_rate.cmp(&a.match_rate));
    recommendations.truncate(TOP_N);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::WeightedRequirement;

    fn job(id: &str, pairs: &[(&str, f64)]) -> Job {
        Job {
            id: id.to_string(),
            name: format!("Job {id}"),
            city: Some("Shanghai".to_string()),
            requirements: WeightedRequirement::from_pairs(pairs.iter().copied()),
        }
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let catalog: Vec<Job> = (0..8)
            .map(|i| {
                let owned_weight = i as f64;
                job(&format!("j{i}"), &[("Rust", owned_weight), ("Go", 10.0 - owned_weight)])
            })
            .collect();
        let person = SkillSet::from_names(["Rust"]);

        let ranked = rank(&person, &catalog);

        assert_eq!(ranked.len(), TOP_N);
        assert!(ranked.windows(2).all(|w| w[0].match_rate >= w[1].match_rate));
        assert_eq!(ranked[0].job_id, "j7");
        assert_eq!(ranked[0].match_rate, 70);
        for rec in &ranked {
            assert!(catalog.iter().any(|j| j.id == rec.job_id));
        }
    }

    #[test]
    fn test_empty_person_uses_default_skills() {
        let catalog = vec![job("a", &[("Java", 1.0)]), job("b", &[("Python", 3.0), ("SQL", 1.0)])];

        let ranked = rank(&SkillSet::new(), &catalog);

        assert_eq!(ranked[0].job_id, "b");
        assert_eq!(ranked[0].match_rate, 100);
        assert_eq!(ranked[0].overlap_skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_job_without_requirements_included_at_zero() {
        let catalog = vec![job("empty", &[]), job("x", &[("Rust", 1.0)])];
        let ranked = rank(&SkillSet::from_names(["Rust"]), &catalog);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].job_id, "empty");
        assert_eq!(ranked[1].match_rate, 0);
        assert!(ranked[1].overlap_skills.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![job("first", &[("Go", 1.0)]), job("second", &[("Go", 2.0)])];
        let ranked = rank(&SkillSet::from_names(["Rust"]), &catalog);
        assert_eq!(ranked[0].job_id, "first");
        assert_eq!(ranked[1].job_id, "second");
    }

    #[test]
    fn test_missing_city_is_unknown() {
        let mut j = job("a", &[("Go", 1.0)]);
        j.city = None;
        let ranked = rank(&SkillSet::from_names(["Go"]), &[j]);
        assert_eq!(ranked[0].city, UNKNOWN_CITY);
    }
}
