//! Request logging for the autocomplete API

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

use super::handlers::CompletionSummary;

/// Log every request once it has been answered.
///
/// Autocomplete responses carry a [`CompletionSummary`], so their line
/// names the term and how many words came back instead of the raw URI.
/// Client errors log at WARN, server errors at ERROR.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        );
    } else if let Some(summary) = response.extensions().get::<CompletionSummary>() {
        info!(
            term = %summary.term,
            results = summary.results,
            duration_ms = %duration_ms,
            "Autocomplete answered"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}
