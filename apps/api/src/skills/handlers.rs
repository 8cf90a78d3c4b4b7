use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::advisor::{ResumeOutcome, SkillSubmission};
use crate::errors::AppError;
use crate::skills::extractor::pdf_to_text;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub prefix: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// Raw list as submitted; entries may be strings, numbers or null.
#[derive(Deserialize)]
pub struct SkillSubmissionRequest {
    pub skills: Vec<Value>,
}

#[derive(Deserialize)]
pub struct ResumeRequest {
    pub resume_text: String,
}

/// GET /api/v1/skills/suggest?prefix=
pub async fn handle_suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: state.dictionary.suggest(&params.prefix),
    })
}

/// GET /api/v1/persons/:person_id/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<SkillSubmission>, AppError> {
    Ok(Json(state.advisor.person_skills(&person_id).await?))
}

/// PUT /api/v1/persons/:person_id/skills
pub async fn handle_put_skills(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(req): Json<SkillSubmissionRequest>,
) -> Result<Json<SkillSubmission>, AppError> {
    Ok(Json(state.advisor.submit_skills(&person_id, &req.skills).await?))
}

/// POST /api/v1/persons/:person_id/resume
pub async fn handle_resume_text(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<ResumeOutcome>, AppError> {
    Ok(Json(
        state
            .advisor
            .ingest_resume(&person_id, &req.resume_text)
            .await?,
    ))
}

/// POST /api/v1/persons/:person_id/resume/pdf
///
/// Multipart form with the PDF under the `file` field.
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ResumeOutcome>, AppError> {
    let mut file_data = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            file_data = Some(field.bytes().await?);
        }
    }

    let bytes = file_data
        .ok_or_else(|| AppError::Validation("Missing file in multipart form".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    // Unreadable uploads are a client error.
    let text = pdf_to_text(bytes)
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(state.advisor.ingest_resume(&person_id, &text).await?))
}
