//! Postgres-backed skill graph.
//!
//! Tables:
//! - `jobs (job_id TEXT PRIMARY KEY, name TEXT, city TEXT)`
//! - `skills (name TEXT PRIMARY KEY)`
//! - `job_requirements (job_id TEXT, skill_name TEXT, weight DOUBLE PRECISION)`
//! - `persons (person_id TEXT PRIMARY KEY, name TEXT)`
//! - `person_skills (person_id TEXT, skill_name TEXT, PRIMARY KEY (person_id, skill_name))`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::matching::types::{CatalogStats, Job, JobSummary, WeightedRequirement};
use crate::models::graph::{CatalogStatsRow, JobRequirementRow, JobSummaryRow, PersonSkillRow};
use crate::planning::ranking::UNKNOWN_CITY;
use crate::skills::normalizer::{normalize, SkillSet};
use crate::store::{SkillGraphStore, StoreError};

#[derive(Clone)]
pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillGraphStore for PgSkillStore {
    async fn person_skills(&self, person_id: &str) -> Result<SkillSet, StoreError> {
        let rows = sqlx::query_as::<_, PersonSkillRow>(
            "SELECT skill_name FROM person_skills WHERE person_id = $1 ORDER BY skill_name",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(normalize(rows.into_iter().map(|r| r.skill_name)))
    }

    async fn job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        let rows = sqlx::query_as::<_, JobRequirementRow>(
            r#"
            SELECT j.job_id, j.name AS job_name, j.city, r.skill_name, r.weight
            FROM jobs j
            LEFT JOIN job_requirements r ON r.job_id = j.job_id
            WHERE j.job_id = $1
            ORDER BY r.skill_name
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_jobs(rows).into_iter().next())
    }

    async fn jobs_with_requirements(&self) -> Result<Vec<Job>, StoreError> {
        let rows = sqlx::query_as::<_, JobRequirementRow>(
            r#"
            SELECT j.job_id, j.name AS job_name, j.city, r.skill_name, r.weight
            FROM jobs j
            LEFT JOIN job_requirements r ON r.job_id = j.job_id
            ORDER BY j.job_id, r.skill_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(group_jobs(rows))
    }

    async fn replace_person_skills(
        &self,
        person_id: &str,
        skills: &SkillSet,
    ) -> Result<(), StoreError> {
        // Single transaction: readers see either the old set or the new one.
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO persons (person_id) VALUES ($1) ON CONFLICT (person_id) DO NOTHING")
            .bind(person_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM person_skills WHERE person_id = $1")
            .bind(person_id)
            .execute(&mut *tx)
            .await?;

        for skill in skills.iter() {
            sqlx::query("INSERT INTO skills (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                .bind(skill)
                .execute(&mut *tx)
                .await?;
            sqlx::query("INSERT INTO person_skills (person_id, skill_name) VALUES ($1, $2)")
                .bind(person_id)
                .bind(skill)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!("Replaced skills for person {person_id} ({} skills)", skills.len());
        Ok(())
    }

    async fn catalog_stats(&self) -> Result<CatalogStats, StoreError> {
        let row = sqlx::query_as::<_, CatalogStatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM jobs) AS job_count,
                (SELECT COUNT(*) FROM skills) AS skill_count,
                (SELECT COUNT(*) FROM job_requirements) AS rel_count
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CatalogStats {
            job_count: row.job_count,
            skill_count: row.skill_count,
            rel_count: row.rel_count,
        })
    }

    async fn search_jobs(&self, query: &str, limit: usize) -> Result<Vec<JobSummary>, StoreError> {
        let rows = sqlx::query_as::<_, JobSummaryRow>(
            r#"
            SELECT job_id, name AS job_name, city
            FROM jobs
            WHERE $1 = ''
               OR strpos(lower(coalesce(name, '')), lower($1)) > 0
               OR strpos(lower(coalesce(city, '')), lower($1)) > 0
            ORDER BY job_id
            LIMIT $2
            "#,
        )
        .bind(query.trim())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| JobSummary {
                id: r.job_id,
                name: r.job_name.unwrap_or_default(),
                city: r.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            })
            .collect())
    }
}

/// Folds joined rows (ordered by job id) into jobs, keeping row order.
fn group_jobs(rows: Vec<JobRequirementRow>) -> Vec<Job> {
    let mut jobs: Vec<Job> = Vec::new();
    let mut pending: Vec<(Option<String>, Option<f64>)> = Vec::new();

    for row in rows {
        let is_new = jobs.last().map(|j| j.id != row.job_id).unwrap_or(true);
        if is_new {
            if let Some(last) = jobs.last_mut() {
                last.requirements = WeightedRequirement::from_rows(pending.drain(..));
            }
            jobs.push(Job {
                id: row.job_id,
                name: row.job_name.unwrap_or_default(),
                city: row.city,
                requirements: WeightedRequirement::new(),
            });
        }
        if row.skill_name.is_some() {
            pending.push((row.skill_name, row.weight));
        }
    }

    if let Some(last) = jobs.last_mut() {
        last.requirements = WeightedRequirement::from_rows(pending.drain(..));
    }

    jobs
}
