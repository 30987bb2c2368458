//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use entregabot_agent::ChatEngine;
use entregabot_core::config::EntregaConfig;
use entregabot_kb::{OrderBook, UserBook};

/// Shared state for the gateway server. Built once at startup; everything
/// in it is read-only on the request path.
pub struct AppState {
    /// API key expected in `X-API-Key`. Empty = auth disabled.
    pub api_key: String,
    /// The chat engine: retrieval, intent routing, provider fallback.
    pub engine: ChatEngine,
    pub orders: OrderBook,
    pub users: UserBook,
}

/// Build the Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);

    // Protected routes require a valid API key when one is configured.
    let protected = Router::new()
        .route("/chat", post(super::routes::chat))
        .route("/pedido/{order_id}", get(super::routes::order_lookup))
        .route("/usuario/{user_id}", get(super::routes::user_lookup))
        .route_layer(axum::middleware::from_fn_with_state(
            shared.clone(),
            super::auth::require_api_key,
        ));

    // Public routes, no auth.
    let public = Router::new().route("/healthz", get(super::routes::healthcheck));

    protected
        .merge(public)
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Load static data, build the engine, and serve until shutdown.
pub async fn start(config: EntregaConfig) -> anyhow::Result<()> {
    let engine = ChatEngine::new(&config).await;

    let orders = match OrderBook::load(&config.data.orders_path()) {
        Ok(book) => {
            tracing::info!("Order book loaded: {} orders", book.len());
            book
        }
        Err(e) => {
            tracing::warn!("Failed to load orders: {e}");
            OrderBook::default()
        }
    };
    let users = match UserBook::load(&config.data.users_path()) {
        Ok(book) => {
            tracing::info!("User book loaded: {} users", book.len());
            book
        }
        Err(e) => {
            tracing::warn!("Failed to load users: {e}");
            UserBook::default()
        }
    };

    if config.api_key.is_empty() {
        tracing::warn!("No API key configured; gateway is open");
    }

    let state = AppState {
        api_key: config.api_key.clone(),
        engine,
        orders,
        users,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Gateway server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
