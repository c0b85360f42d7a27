//! HTTP boundary for the dispatch core.
//!
//! Two endpoints:
//! - `POST /productionplan` — validate a load/fuels/plants payload, run the
//!   merit-order dispatch, return the allocation list
//! - `GET /health` — liveness probe
//!
//! The router is stateless; every request runs an independent dispatch pass,
//! so concurrent requests need no coordination.

pub mod handlers;
pub mod types;
pub mod validate;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};

/// Builds the axum router with all API routes.
pub fn router() -> Router {
    Router::new()
        .route("/productionplan", post(handlers::production_plan))
        .route("/health", get(handlers::get_health))
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(addr: SocketAddr) {
    let app = router();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    tracing::info!(%addr, "production-plan API listening");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
