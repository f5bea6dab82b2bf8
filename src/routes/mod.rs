//! HTTP routes for the Gemini proxy
//!
//! This module defines all HTTP endpoints exposed by the server.

pub mod generate;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Every method reaches the function so it can answer 405 itself
    let function_routes = Router::new().route(
        state.config.function_path.as_str(),
        any(generate::gemini_proxy),
    );

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(function_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
