use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One `jobs ⟕ job_requirements` row. Skill columns are NULL for jobs without
/// requirement edges.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRequirementRow {
    pub job_id: String,
    pub job_name: Option<String>,
    pub city: Option<String>,
    pub skill_name: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonSkillRow {
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSummaryRow {
    pub job_id: String,
    pub job_name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogStatsRow {
    pub job_count: i64,
    pub skill_count: i64,
    pub rel_count: i64,
}
