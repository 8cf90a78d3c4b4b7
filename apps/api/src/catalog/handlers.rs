use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::{detail, search, stats, JobDetail};
use crate::errors::AppError;
use crate::matching::types::{CatalogStats, JobSummary};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/jobs?q=
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<JobSummary>>, AppError> {
    Ok(Json(search(state.advisor.store().as_ref(), &params.q).await?))
}

/// GET /api/v1/jobs/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<CatalogStats>, AppError> {
    Ok(Json(stats(state.advisor.store().as_ref()).await?))
}

/// GET /api/v1/jobs/:job_id
pub async fn handle_job_detail(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDetail>, AppError> {
    detail(state.advisor.store().as_ref(), &job_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}
