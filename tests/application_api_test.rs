use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use jobform_backend::database::memory::InMemoryApplicationStore;
use jobform_backend::{routes, AppState};

fn test_app() -> Router {
    let state = AppState::with_store(
        Arc::new(InMemoryApplicationStore::new()),
        "test".to_string(),
    );

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/test", get(routes::health::api_test))
        .route(
            "/api/applications/submit",
            post(routes::application_routes::submit_application),
        )
        .route(
            "/api/applications",
            get(routes::application_routes::list_applications),
        )
        .route(
            "/api/applications/:id",
            get(routes::application_routes::get_application)
                .delete(routes::application_routes::delete_application),
        )
        .route(
            "/api/applications/:id/status",
            put(routes::application_routes::update_application_status),
        )
        .with_state(state)
}

fn submit_body(full_name: &str) -> JsonValue {
    json!({
        "fullName": full_name,
        "email": "j@x.com",
        "phone": "123",
        "governorate": "Cairo",
        "major": "CS",
        "graduationYear": "2024",
        "applicationType": "full-time",
        "skills": "JS"
    })
}

async fn send_json(app: &Router, method: &str, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn submit_then_fetch_roundtrip() {
    let app = test_app();

    let before = Utc::now();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/applications/submit",
        submit_body("Jane Doe"),
    )
    .await;
    let after = Utc::now();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Application submitted successfully"));
    let id = body["applicationId"].as_str().expect("applicationId");
    Uuid::parse_str(id).expect("valid uuid");

    let (status, body) = send(&app, "GET", &format!("/api/applications/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let application = &body["application"];
    assert_eq!(application["fullName"], json!("Jane Doe"));
    assert_eq!(application["email"], json!("j@x.com"));
    assert_eq!(application["phone"], json!("123"));
    assert_eq!(application["governorate"], json!("Cairo"));
    assert_eq!(application["major"], json!("CS"));
    assert_eq!(application["graduationYear"], json!("2024"));
    assert_eq!(application["applicationType"], json!("full-time"));
    assert_eq!(application["skills"], json!("JS"));
    assert_eq!(application["status"], json!("pending"));
    assert_eq!(application["expectedSalary"], json!(""));
    assert_eq!(application["reviewedBy"], json!(""));
    assert!(application["reviewedAt"].is_null());

    let submitted_at: DateTime<Utc> = application["submittedAt"]
        .as_str()
        .expect("submittedAt")
        .parse()
        .expect("rfc3339 timestamp");
    assert!(submitted_at >= before && submitted_at <= after);
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let app = test_app();

    let (_, first) = send_json(&app, "POST", "/api/applications/submit", submit_body("A")).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (_, second) = send_json(&app, "POST", "/api/applications/submit", submit_body("B")).await;

    let (status, body) = send(&app, "GET", "/api/applications").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let applications = body["applications"].as_array().expect("array");
    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0]["id"], second["applicationId"]);
    assert_eq!(applications[1]["id"], first["applicationId"]);
}

#[tokio::test]
async fn get_unknown_id_returns_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/applications/{}", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Application not found"));
}

#[tokio::test]
async fn get_malformed_id_returns_not_found() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/applications/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Application not found"));
}

#[tokio::test]
async fn update_status_stamps_reviewer_fields() {
    let app = test_app();

    let (_, submitted) =
        send_json(&app, "POST", "/api/applications/submit", submit_body("Jane Doe")).await;
    let id = submitted["applicationId"].as_str().unwrap().to_string();

    let before = Utc::now();
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}/status", id),
        json!({ "status": "approved", "reviewedBy": "alice" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let application = &body["application"];
    assert_eq!(application["status"], json!("approved"));
    assert_eq!(application["reviewedBy"], json!("alice"));
    assert_eq!(application["fullName"], json!("Jane Doe"));

    let reviewed_at: DateTime<Utc> = application["reviewedAt"]
        .as_str()
        .expect("reviewedAt stamped")
        .parse()
        .expect("rfc3339 timestamp");
    assert!(reviewed_at >= before);
}

#[tokio::test]
async fn update_status_unknown_id_returns_not_found() {
    let app = test_app();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}/status", Uuid::new_v4()),
        json!({ "status": "approved", "reviewedBy": "alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn delete_then_fetch_returns_not_found() {
    let app = test_app();

    let (_, submitted) =
        send_json(&app, "POST", "/api/applications/submit", submit_body("Jane Doe")).await;
    let id = submitted["applicationId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "DELETE", &format!("/api/applications/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Application deleted successfully"));

    let (status, _) = send(&app, "GET", &format!("/api/applications/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/applications/{}", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Application not found"));
}

#[tokio::test]
async fn submit_with_empty_required_field_is_rejected() {
    let app = test_app();

    let (status, body) = send_json(&app, "POST", "/api/applications/submit", submit_body("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (_, body) = send(&app, "GET", "/api/applications").await;
    assert_eq!(body["applications"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn probe_endpoints_report_environment() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Job Application API is working!"));
    assert_eq!(body["environment"], json!("test"));
    assert!(body["timestamp"].is_string());

    let (status, body) = send(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["environment"], json!("test"));
    assert!(body["timestamp"].is_string());
}
