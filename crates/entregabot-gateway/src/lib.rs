//! # EntregaBot Gateway
//!
//! Thin HTTP surface over the chat engine: axum routes, API-key
//! middleware, and server startup wiring. No business logic lives here.

pub mod auth;
pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
