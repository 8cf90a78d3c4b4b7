use axum::{
    extract::{Path, State},
    Json,
};

use crate::advisor::PathView;
use crate::errors::AppError;
use crate::planning::ranking::JobRecommendation;
use crate::state::AppState;

/// GET /api/v1/persons/:person_id/path/:job_id
pub async fn handle_path(
    State(state): State<AppState>,
    Path((person_id, job_id)): Path<(String, String)>,
) -> Result<Json<PathView>, AppError> {
    Ok(Json(state.advisor.learning_path(&person_id, &job_id).await?))
}

/// GET /api/v1/persons/:person_id/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<Vec<JobRecommendation>>, AppError> {
    Ok(Json(state.advisor.recommend_jobs(&person_id).await?))
}
