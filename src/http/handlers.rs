//! HTTP request handlers for the autocomplete API
//!
//! Implements the autocomplete and health endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};

use crate::core::search::{render_lines, AutocompleteQuery};
use crate::core::services::Services;
use crate::core::types::HealthResponse;

/// What an autocomplete request was answered with.
///
/// Attached to the response as an extension so the request log can
/// report it without reading the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub term: String,
    pub results: usize,
}

/// Health check handler
///
/// Returns server status, version and the index lifecycle state.
/// Always 200: a failed or unfinished build does not make the
/// server unhealthy.
pub async fn health_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(HealthResponse::from_handle(&services.index))
}

/// Autocomplete handler
///
/// Answers `GET /autocomplete?term=<prefix>&top=<n>` with one word
/// per line, most frequent first.
///
/// # Arguments
///
/// * `services` - Shared services
/// * `query` - `term` (defaults to empty) and raw `top`
///
/// # Returns
///
/// `text/plain` body, empty while the index is still building
pub async fn autocomplete_handler(
    State(services): State<Arc<Services>>,
    Query(query): Query<AutocompleteQuery>,
) -> impl IntoResponse {
    let words = services.autocomplete.query(&query);

    tracing::debug!(top = ?query.top, index = ?services.index.status(), "Autocomplete query");

    let summary = CompletionSummary {
        term: query.term,
        results: words.len(),
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Extension(summary),
        render_lines(&words),
    )
}
