pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::planning::handlers as planning;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills
        .route("/api/v1/skills/suggest", get(skills::handle_suggest))
        .route(
            "/api/v1/persons/:person_id/skills",
            get(skills::handle_get_skills).put(skills::handle_put_skills),
        )
        .route(
            "/api/v1/persons/:person_id/resume",
            post(skills::handle_resume_text),
        )
        .route(
            "/api/v1/persons/:person_id/resume/pdf",
            post(skills::handle_resume_pdf),
        )
        // Matching and planning
        .route(
            "/api/v1/persons/:person_id/match/:job_id",
            get(matching::handle_match),
        )
        .route(
            "/api/v1/persons/:person_id/path/:job_id",
            get(planning::handle_path),
        )
        .route(
            "/api/v1/persons/:person_id/recommendations",
            get(planning::handle_recommendations),
        )
        // Catalog
        .route("/api/v1/jobs", get(catalog::handle_search_jobs))
        .route("/api/v1/jobs/stats", get(catalog::handle_stats))
        .route("/api/v1/jobs/:job_id", get(catalog::handle_job_detail))
        .with_state(state)
}
