//! API route handlers for the gateway.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, response::IntoResponse};
use std::sync::Arc;

use entregabot_core::types::{ChatRequest, ChatResponse};

use super::server::AppState;

/// Liveness probe. Fixed payload regardless of corpus or provider state.
pub async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Chat endpoint: intent routing + retrieval + provider fallback.
/// Always answers 200; provider problems surface only in the advisory.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(state.engine.handle_chat(&req.message).await)
}

/// Order lookup by id (`PED-<digits>`). Unknown ids are an explicit 404,
/// not a generic error.
pub async fn order_lookup(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> impl IntoResponse {
    match state.orders.get(&order_id) {
        Some(order) => (StatusCode::OK, Json(serde_json::to_value(order).unwrap_or_default())),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Pedido não encontrado." })),
        ),
    }
}

/// User lookup by id (`USR-<digits>`, case-insensitive).
pub async fn user_lookup(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    match state.users.get(&user_id) {
        Some(user) => (StatusCode::OK, Json(serde_json::to_value(user).unwrap_or_default())),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Usuário não encontrado." })),
        ),
    }
}
