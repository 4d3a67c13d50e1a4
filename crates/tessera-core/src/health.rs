use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// Handler for `GET /health`.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
