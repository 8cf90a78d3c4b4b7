use axum::{
    extract::{Path, State},
    Json,
};

use crate::advisor::Diagnosis;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/persons/:person_id/match/:job_id
pub async fn handle_match(
    State(state): State<AppState>,
    Path((person_id, job_id)): Path<(String, String)>,
) -> Result<Json<Diagnosis>, AppError> {
    Ok(Json(state.advisor.diagnose(&person_id, &job_id).await?))
}
