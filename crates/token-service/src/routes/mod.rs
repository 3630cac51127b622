//! HTTP routes for the token service.
//!
//! Defines the Axum router wiring the issuance endpoint together with the
//! operational endpoints.

use crate::handlers::{self, token_handler};
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub use crate::handlers::token_handler::AppState;

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `POST /get-livekit-token` - Token issuance endpoint
/// - `GET /health` - Liveness probe (simple "OK") - public, unversioned
/// - `GET /metrics` - Prometheus metrics endpoint - public, unversioned
/// - CORS open to any origin (browser clients fetch tokens cross-origin)
/// - TraceLayer for request logging
/// - 30 second request timeout
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/get-livekit-token", post(token_handler::handle_room_token))
        .with_state(state);

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Merge routes and apply global middleware layers
    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    // 3. CorsLayer - Permit any origin (outermost, also answers preflight)
    api_routes
        .merge(metrics_routes)
        .route("/health", get(health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> &'static str {
    "OK"
}
