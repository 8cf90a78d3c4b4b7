//! Skill graph storage — persons, skills, jobs and weighted requirement edges.
//!
//! `SkillGraphStore` is the only way the rest of the crate touches stored
//! state. `AppState` carries an `Arc<dyn SkillGraphStore>`; Postgres in
//! production, the in-memory store in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::matching::types::{CatalogStats, Job, JobSummary};
use crate::skills::normalizer::SkillSet;

pub use memory::InMemorySkillStore;
pub use postgres::PgSkillStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SkillGraphStore: Send + Sync {
    /// Skills currently owned by the person. Unknown persons own nothing.
    async fn person_skills(&self, person_id: &str) -> Result<SkillSet, StoreError>;

    /// The job with its requirements, or `None` when no such job exists.
    async fn job(&self, job_id: &str) -> Result<Option<Job>, StoreError>;

    /// Every job with its requirements, ordered by job id.
    async fn jobs_with_requirements(&self) -> Result<Vec<Job>, StoreError>;

    /// Replaces the person's whole skill set (last write wins, never merges).
    /// Creates the person if needed.
    async fn replace_person_skills(
        &self,
        person_id: &str,
        skills: &SkillSet,
    ) -> Result<(), StoreError>;

    async fn catalog_stats(&self) -> Result<CatalogStats, StoreError>;

    /// Case-insensitive substring search over job name and city, ordered by id.
    /// An empty query matches everything.
    async fn search_jobs(&self, query: &str, limit: usize) -> Result<Vec<JobSummary>, StoreError>;
}
