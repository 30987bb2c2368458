//! API-key middleware.
//!
//! Validates the `X-API-Key` header against the configured key. When no
//! key is configured every request passes, so local development and tests
//! run unauthenticated.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use super::server::AppState;

pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> axum::response::Response {
    if state.api_key.is_empty() {
        return next.run(req).await;
    }

    let from_header = req
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if from_header == state.api_key {
        return next.run(req).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "detail": "Unauthorized" })),
    )
        .into_response()
}
