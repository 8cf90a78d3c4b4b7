//! Advisor: orchestrates one request end to end.
//!
//! Flow per operation: validate ids → load from the store → pure scoring or
//! planning → (diagnosis only) summary + narrative report.
//!
//! The person id is always passed in explicitly; nothing here keeps
//! per-user state between calls.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::matching::scorer::{score, MatchResult};
use crate::matching::summary::competition_summary;
use crate::matching::MatchError;
use crate::planning::phases::{LearningPath, PathPlanner};
use crate::planning::ranking::{rank, JobRecommendation};
use crate::report::ReportGenerator;
use crate::skills::extractor::SkillExtractor;
use crate::skills::normalizer::{normalize_values, SkillSet};
use crate::store::SkillGraphStore;

// ────────────────────────────────────────────────────────────────────────────
// Response models
// ────────────────────────────────────────────────────────────────────────────

/// Match diagnosis plus its human-facing text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(flatten)]
    pub result: MatchResult,
    pub competition_summary: String,
    /// `None` when report generation failed; see `report_error`.
    pub report: Option<String>,
    pub report_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathView {
    pub learning_path: LearningPath,
    pub recommended_jobs: Vec<JobRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSubmission {
    pub person_id: String,
    pub skills: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    Stored,
    /// Nothing recognized; stored skills were left as they were.
    NoSkillsRecognized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeOutcome {
    pub person_id: String,
    pub status: ResumeStatus,
    pub skills: Vec<String>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub struct Advisor {
    store: Arc<dyn SkillGraphStore>,
    extractor: Arc<dyn SkillExtractor>,
    reporter: Arc<dyn ReportGenerator>,
    planner: PathPlanner,
}

impl Advisor {
    pub fn new(
        store: Arc<dyn SkillGraphStore>,
        extractor: Arc<dyn SkillExtractor>,
        reporter: Arc<dyn ReportGenerator>,
        planner: PathPlanner,
    ) -> Self {
        Self {
            store,
            extractor,
            reporter,
            planner,
        }
    }

    pub fn store(&self) -> &Arc<dyn SkillGraphStore> {
        &self.store
    }

    /// Scores the person against one job and attaches summary and report.
    ///
    /// A person with no stored skills gets a valid zero score. A report failure
    /// is carried in the response, never returned as an error.
    pub async fn diagnose(&self, person_id: &str, job_id: &str) -> Result<Diagnosis, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        let job_id = validate_id("job id", job_id)?;

        let person = self.store.person_skills(&person_id).await?;
        let job = self
            .store
            .job(&job_id)
            .await?
            .ok_or_else(|| MatchError::NoRequirements(job_id.clone()))?;

        let result = score(&person, &job.requirements, &job.id, &job.name)?;
        info!(
            "Diagnosed person={} job={} score={} level={}",
            person_id,
            job_id,
            result.match_score,
            result.match_level.label()
        );

        let summary = competition_summary(&result);
        let (report, report_error) = match self.reporter.generate(&result).await {
            Ok(text) => (Some(text), None),
            Err(e) => {
                warn!(
                    "Report generation ({}) failed for job {}: {e}",
                    self.reporter.backend(),
                    job_id
                );
                (None, Some(e.to_string()))
            }
        };

        Ok(Diagnosis {
            result,
            competition_summary: summary,
            report,
            report_error,
        })
    }

    /// Learning path toward one job plus the top catalog recommendations.
    /// An empty owned set is valid here.
    pub async fn learning_path(&self, person_id: &str, job_id: &str) -> Result<PathView, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        let job_id = validate_id("job id", job_id)?;

        let person = self.store.person_skills(&person_id).await?;
        let job = self
            .store
            .job(&job_id)
            .await?
            .ok_or_else(|| MatchError::NoRequirements(job_id.clone()))?;

        let learning_path = self
            .planner
            .plan(&person, &job.requirements, &job.id, &job.name)?;

        let catalog = self.store.jobs_with_requirements().await?;
        let recommended_jobs = rank(&person, &catalog);

        info!(
            "Planned path person={} job={} missing={} recommendations={}",
            person_id,
            job_id,
            learning_path.missing_skills.len(),
            recommended_jobs.len()
        );

        Ok(PathView {
            learning_path,
            recommended_jobs,
        })
    }

    pub async fn recommend_jobs(&self, person_id: &str) -> Result<Vec<JobRecommendation>, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        let person = self.store.person_skills(&person_id).await?;
        let catalog = self.store.jobs_with_requirements().await?;
        let ranked = rank(&person, &catalog);
        info!(
            "Ranked {} catalog jobs for person={}, returning {}",
            catalog.len(),
            person_id,
            ranked.len()
        );
        Ok(ranked)
    }

    pub async fn person_skills(&self, person_id: &str) -> Result<SkillSubmission, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        let skills = self.store.person_skills(&person_id).await?;
        Ok(submission(person_id, &skills))
    }

    /// Manual submission: raw values are normalized, then replace the stored set.
    pub async fn submit_skills(
        &self,
        person_id: &str,
        raw: &[Value],
    ) -> Result<SkillSubmission, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        let skills = normalize_values(raw);
        if skills.is_empty() {
            return Err(MatchError::InvalidInput(
                "at least one skill is required".to_string(),
            ));
        }

        self.store.replace_person_skills(&person_id, &skills).await?;
        info!("Stored {} skills for person={}", skills.len(), person_id);
        Ok(submission(person_id, &skills))
    }

    /// Extracts skills from resume text and replaces the stored set with them.
    pub async fn ingest_resume(&self, person_id: &str, text: &str) -> Result<ResumeOutcome, MatchError> {
        let person_id = validate_id("person id", person_id)?;
        if text.trim().is_empty() {
            return Err(MatchError::InvalidInput("resume text is empty".to_string()));
        }

        let skills = self.extractor.extract(text).await?;
        if skills.is_empty() {
            info!("No skills recognized in resume for person={}", person_id);
            return Ok(ResumeOutcome {
                person_id,
                status: ResumeStatus::NoSkillsRecognized,
                skills: Vec::new(),
                count: 0,
            });
        }

        self.store.replace_person_skills(&person_id, &skills).await?;
        info!(
            "Extracted and stored {} skills from resume for person={}",
            skills.len(),
            person_id
        );
        Ok(ResumeOutcome {
            person_id,
            status: ResumeStatus::Stored,
            count: skills.len(),
            skills: skills.to_vec(),
        })
    }
}

fn submission(person_id: String, skills: &SkillSet) -> SkillSubmission {
    SkillSubmission {
        person_id,
        count: skills.len(),
        skills: skills.to_vec(),
    }
}

/// Trims an id; blank ids are rejected before any store access.
pub fn validate_id(kind: &str, raw: &str) -> Result<String, MatchError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(MatchError::InvalidInput(format!("{kind} must not be empty")));
    }
    Ok(id.to_string())
}
