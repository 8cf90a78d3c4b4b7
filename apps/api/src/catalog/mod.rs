// Catalog exploration: counts, job search and job detail.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::advisor::validate_id;
use crate::matching::types::{CatalogStats, JobSummary, Requirement};
use crate::matching::MatchError;
use crate::planning::ranking::UNKNOWN_CITY;
use crate::store::SkillGraphStore;

/// Search result cap.
pub const SEARCH_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub name: String,
    pub city: String,
    pub skills: Vec<Requirement>,
}

pub async fn stats(store: &dyn SkillGraphStore) -> Result<CatalogStats, MatchError> {
    Ok(store.catalog_stats().await?)
}

pub async fn search(store: &dyn SkillGraphStore, query: &str) -> Result<Vec<JobSummary>, MatchError> {
    Ok(store.search_jobs(query.trim(), SEARCH_LIMIT).await?)
}

/// `None` for an unknown job. A job without requirements still has a detail view.
pub async fn detail(store: &dyn SkillGraphStore, job_id: &str) -> Result<Option<JobDetail>, MatchError> {
    let job_id = validate_id("job id", job_id)?;
    Ok(store.job(&job_id).await?.map(|job| JobDetail {
        skills: job.requirements.iter().cloned().collect(),
        city: job.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
        id: job.id,
        name: job.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::{Job, WeightedRequirement};
    use crate::store::InMemorySkillStore;

    fn store() -> InMemorySkillStore {
        InMemorySkillStore::with_jobs(vec![
            Job {
                id: "j1".to_string(),
                name: "Rust Developer".to_string(),
                city: None,
                requirements: WeightedRequirement::from_rows([
                    (Some("Rust"), Some(3.0)),
                    (Some("SQL"), None),
                ]),
            },
            Job {
                id: "j2".to_string(),
                name: "Analyst".to_string(),
                city: Some("Hangzhou".to_string()),
                requirements: WeightedRequirement::new(),
            },
        ])
    }

    #[tokio::test]
    async fn test_detail_defaults_city_and_weight() {
        let detail = detail(&store(), "j1").await.unwrap().unwrap();
        assert_eq!(detail.city, UNKNOWN_CITY);
        assert_eq!(detail.skills.len(), 2);
        assert_eq!(detail.skills[1].skill, "SQL");
        assert_eq!(detail.skills[1].weight, 1.0);
    }

    #[tokio::test]
    async fn test_detail_unknown_job_is_none() {
        assert!(detail(&store(), "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let found = search(&store(), "  hangzhou ").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "j2");
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let stats = stats(&store()).await.unwrap();
        assert_eq!(stats.job_count, 2);
        assert_eq!(stats.rel_count, 2);
    }
}
