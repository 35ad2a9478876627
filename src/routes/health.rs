use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::utils::time;
use crate::AppState;

#[axum::debug_handler]
pub async fn api_test(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "message": "Job Application API is working!",
        "timestamp": time::to_rfc3339(time::now()),
        "environment": state.environment,
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "OK",
        "timestamp": time::to_rfc3339(time::now()),
        "environment": state.environment,
    });
    (StatusCode::OK, Json(body))
}
