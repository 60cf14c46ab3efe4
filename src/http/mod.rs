//! HTTP adapter
//!
//! Depends only on core/. Serves `GET /autocomplete` and
//! `GET /health` via the Axum web framework.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the application router over shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/autocomplete", get(autocomplete_handler))
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
