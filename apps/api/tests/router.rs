use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use skillpath::matching::types::{Job, WeightedRequirement};
use skillpath::report::TemplateReportGenerator;
use skillpath::routes::build_router;
use skillpath::skills::dictionary::SkillDictionary;
use skillpath::skills::normalizer::SkillSet;
use skillpath::state::AppState;
use skillpath::store::InMemorySkillStore;

fn test_app() -> Router {
    let store = InMemorySkillStore::with_jobs(vec![
        Job {
            id: "j1".to_string(),
            name: "Java Developer".to_string(),
            city: Some("Beijing".to_string()),
            requirements: WeightedRequirement::from_pairs([("Java", 3.0), ("MySQL", 1.0)]),
        },
        Job {
            id: "j2".to_string(),
            name: "Data Analyst".to_string(),
            city: None,
            requirements: WeightedRequirement::from_pairs([("Python", 2.0), ("SQL", 2.0)]),
        },
        Job {
            id: "j3".to_string(),
            name: "Placeholder".to_string(),
            city: None,
            requirements: WeightedRequirement::new(),
        },
    ])
    .with_person("p1", SkillSet::from_names(["Java"]));

    let state = AppState::new(
        Arc::new(store),
        SkillDictionary::builtin(),
        Arc::new(TemplateReportGenerator),
    );
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(uri: &str, field: &str, content: &[u8]) -> Request<Body> {
    let boundary = "skillpath-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, json) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "skillpath-api");
}

#[tokio::test]
async fn test_match_diagnosis() {
    let app = test_app();
    let (status, json) = send(&app, get("/api/v1/persons/p1/match/j1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["match_score"], 75);
    assert_eq!(json["match_level"], "good");
    assert_eq!(json["owned_skills"], json!(["Java"]));
    assert_eq!(json["missing_skills"], json!(["MySQL"]));
    assert_eq!(json["recommend_skills"], json!(["MySQL"]));
    assert_eq!(json["radar_data"]["dimensions"], json!(["Java", "MySQL"]));
    assert!(json["competition_summary"].as_str().unwrap().contains("75%"));
    assert!(json["report"].is_string());
    assert!(json["report_error"].is_null());
}

#[tokio::test]
async fn test_match_without_requirements_is_404() {
    let app = test_app();

    let (status, json) = send(&app, get("/api/v1/persons/p1/match/j3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NO_REQUIREMENTS");

    let (status, _) = send(&app, get("/api/v1/persons/p1/match/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_match_without_skills_scores_zero() {
    let app = test_app();
    let (status, json) = send(&app, get("/api/v1/persons/nobody/match/j1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["match_score"], 0);
    assert_eq!(json["match_level"], "needs improvement");
    assert_eq!(json["owned_skills"], json!([]));
    assert_eq!(json["missing_skills"], json!(["Java", "MySQL"]));
}

#[tokio::test]
async fn test_blank_person_id_is_400() {
    let app = test_app();
    let (status, _) = send(&app, get("/api/v1/persons/%20/recommendations")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_learning_path_and_recommendations() {
    let app = test_app();
    let (status, json) = send(&app, get("/api/v1/persons/p1/path/j2")).await;

    assert_eq!(status, StatusCode::OK);
    let path = &json["learning_path"];
    assert_eq!(path["missing_skills"], json!(["Python", "SQL"]));
    assert_eq!(path["phases"].as_array().unwrap().len(), 3);
    assert_eq!(path["phases"][0]["skills"], json!(["Python", "SQL"]));
    assert_eq!(path["phases"][1]["skills"], json!([]));

    let recommended = json["recommended_jobs"].as_array().unwrap();
    assert_eq!(recommended.len(), 3);
    assert_eq!(recommended[0]["job_id"], "j1");
    assert_eq!(recommended[0]["match_rate"], 75);
}

#[tokio::test]
async fn test_put_skills_replaces_then_get_reads_back() {
    let app = test_app();

    let (status, json) = send(
        &app,
        json_request(
            "PUT",
            "/api/v1/persons/p1/skills",
            json!({"skills": [" Python ", null, "SQL", "Python"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);

    let (_, json) = send(&app, get("/api/v1/persons/p1/skills")).await;
    assert_eq!(json["skills"], json!(["Python", "SQL"]));

    let (_, json) = send(&app, get("/api/v1/persons/p1/recommendations")).await;
    assert_eq!(json[0]["job_id"], "j2");
    assert_eq!(json[0]["match_rate"], 100);
}

#[tokio::test]
async fn test_put_empty_skills_is_400() {
    let app = test_app();
    let (status, _) = send(
        &app,
        json_request("PUT", "/api/v1/persons/p1/skills", json!({"skills": ["  "]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resume_text_ingest() {
    let app = test_app();

    let (status, json) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/persons/p2/resume",
            json!({"resume_text": "Three years of Python and MySQL tuning"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "stored");
    assert_eq!(json["skills"], json!(["MySQL", "Python"]));

    let (status, json) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/persons/p1/resume",
            json!({"resume_text": "Enjoys hiking"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "no_skills_recognized");

    // p1 keeps the seeded skills.
    let (_, json) = send(&app, get("/api/v1/persons/p1/skills")).await;
    assert_eq!(json["skills"], json!(["Java"]));
}

#[tokio::test]
async fn test_resume_pdf_rejects_bad_uploads() {
    let app = test_app();

    let (status, _) = send(
        &app,
        multipart_request("/api/v1/persons/p1/resume/pdf", "file", b"not a pdf"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(
        &app,
        multipart_request("/api/v1/persons/p1/resume/pdf", "other", b"x"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_skill_suggest() {
    let app = test_app();
    let (status, json) = send(&app, get("/api/v1/skills/suggest?prefix=ja")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["suggestions"], json!(["Java", "JavaScript"]));
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let app = test_app();

    let (status, json) = send(&app, get("/api/v1/jobs/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["job_count"], 3);
    assert_eq!(json["rel_count"], 4);

    let (_, json) = send(&app, get("/api/v1/jobs?q=beijing")).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "j1");

    let (_, json) = send(&app, get("/api/v1/jobs")).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[1]["city"], "unknown");

    let (status, json) = send(&app, get("/api/v1/jobs/j2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["skills"][0]["skill"], "Python");

    let (status, json) = send(&app, get("/api/v1/jobs/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}
