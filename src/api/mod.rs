//! HTTP API module for the platform hello service
//!
//! Provides the application endpoints and the Prometheus exposition.
//!
//! # Endpoints
//! - `GET /` — greeting (application listener)
//! - `GET /health` — health check (application listener)
//! - `GET /metrics` — Prometheus metrics (metrics listener, any path)

pub mod handlers;
pub mod middleware;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

/// Creates the application router with all endpoints.
///
/// The counting layer wraps the routes and the fallback, so unmatched
/// paths are counted before they resolve to 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::count_requests,
        ))
        .with_state(state)
}

/// Creates the metrics router.
///
/// The exposition is served on any path, which is what external scrapers
/// expect from a dedicated metrics port.
pub fn create_metrics_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .fallback(handlers::metrics_handler)
        .with_state(state)
}
