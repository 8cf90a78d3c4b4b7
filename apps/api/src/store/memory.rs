//! In-memory skill graph for tests and local demos.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::matching::types::{CatalogStats, Job, JobSummary};
use crate::planning::ranking::UNKNOWN_CITY;
use crate::skills::normalizer::SkillSet;
use crate::store::{SkillGraphStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemorySkillStore {
    jobs: RwLock<Vec<Job>>,
    persons: RwLock<HashMap<String, SkillSet>>,
}

impl InMemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds jobs; kept sorted by id like the database ordering.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let mut jobs = jobs;
        jobs.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            jobs: RwLock::new(jobs),
            persons: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_person(mut self, person_id: &str, skills: SkillSet) -> Self {
        self.persons
            .get_mut()
            .insert(person_id.to_string(), skills);
        self
    }
}

#[async_trait]
impl SkillGraphStore for InMemorySkillStore {
    async fn person_skills(&self, person_id: &str) -> Result<SkillSet, StoreError> {
        Ok(self
            .persons
            .read()
            .await
            .get(person_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == job_id).cloned())
    }

    async fn jobs_with_requirements(&self) -> Result<Vec<Job>, StoreError> {
        Ok(self.jobs.read().await.clone())
    }

    async fn replace_person_skills(
        &self,
        person_id: &str,
        skills: &SkillSet,
    ) -> Result<(), StoreError> {
        self.persons
            .write()
            .await
            .insert(person_id.to_string(), skills.clone());
        Ok(())
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, StoreError> {
        let jobs = self.jobs.read().await;
        let persons = self.persons.read().await;

        let mut skills: Vec<&str> = jobs
            .iter()
            .flat_map(|j| j.requirements.iter().map(|r| r.skill.as_str()))
            .chain(persons.values().flat_map(|s| s.iter()))
            .collect();
        skills.sort_unstable();
        skills.dedup();

        Ok(CatalogStats {
            job_count: jobs.len() as i64,
            skill_count: skills.len() as i64,
            rel_count: jobs.iter().map(|j| j.requirements.len() as i64).sum(),
        })
    }

    async fn search_jobs(&self, query: &str, limit: usize) -> Result<Vec<JobSummary>, StoreError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .jobs
            .read()
            .await
            .iter()
            .filter(|j| {
                needle.is_empty()
                    || j.name.to_lowercase().contains(&needle)
                    || j.city
                        .as_deref()
                        .map(|c| c.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .take(limit)
            .map(|j| JobSummary {
                id: j.id.clone(),
                name: j.name.clone(),
                city: j.city.clone().unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            })
            .collect())
    }
}
