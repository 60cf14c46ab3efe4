//! Integration tests for the autocomplete HTTP API
//!
//! Drives the router with `tower::ServiceExt::oneshot`, covering the
//! loading window, a published index and a failed build.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use autocomplete::core::index::IndexStatus;
use autocomplete::core::types::HealthResponse;
use autocomplete::http::{self, CompletionSummary};
use tower::ServiceExt as TowerServiceExt;

use crate::common::{
    create_published_services, create_test_services, missing_corpus_services, TestCorpus, HAMLET,
    TIE_CORPUS,
};

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_autocomplete_returns_lines() {
    let (services, _corpus) = create_published_services(TIE_CORPUS);
    let app = http::router(services);

    let (status, content_type, body) = get(app, "/autocomplete?term=th&top=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "the\nthis\nthat\n");
}

#[tokio::test]
async fn test_autocomplete_default_and_bad_top() {
    let (services, _corpus) = create_published_services(HAMLET);

    let (_, _, body) = get(http::router(services.clone()), "/autocomplete?term=").await;
    assert_eq!(body.lines().count(), 25);

    let (_, _, body) = get(http::router(services.clone()), "/autocomplete?top=abc").await;
    assert_eq!(body.lines().count(), 25);

    let (status, _, body) = get(http::router(services.clone()), "/autocomplete?top=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, _, body) = get(http::router(services), "/autocomplete?term=t&top=-2").await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_autocomplete_is_case_sensitive() {
    let (services, _corpus) = create_published_services(HAMLET);

    let (_, _, body) = get(http::router(services.clone()), "/autocomplete?term=T").await;
    assert_eq!(body, "To\nThat\nThe\n");

    let (_, _, body) = get(http::router(services), "/autocomplete?term=t&top=2").await;
    assert_eq!(body, "to\nthe\n");
}

#[tokio::test]
async fn test_autocomplete_while_building_is_empty() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());

    let (status, _, body) = get(http::router(services.clone()), "/autocomplete?term=t").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, _, body) = get(http::router(services), "/health").await;
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.index, IndexStatus::Building);
}

#[tokio::test]
async fn test_autocomplete_after_background_build() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());
    services.spawn_index_build().await.unwrap();

    let (_, _, body) = get(http::router(services), "/autocomplete?term=a&top=2").await;
    assert_eq!(body, "a\nand\n");
}

#[tokio::test]
async fn test_health_reports_ready_index() {
    let (services, _corpus) = create_published_services(HAMLET);

    let (status, content_type, body) = get(http::router(services), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
    assert_eq!(health.index, IndexStatus::Ready);
    assert_eq!(health.words, Some(41));
    assert_eq!(health.error, None);
}

#[tokio::test]
async fn test_failed_build_keeps_serving() {
    let services = missing_corpus_services();
    services.spawn_index_build().await.unwrap();

    let (status, _, body) = get(http::router(services.clone()), "/autocomplete?term=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, _, body) = get(http::router(services), "/health").await;
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.index, IndexStatus::Failed);
    assert!(health.error.unwrap().contains("Corpus unavailable"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (services, _corpus) = create_published_services(TIE_CORPUS);
    let (status, _, _) = get(http::router(services), "/search?term=th").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_padded_top_falls_back_to_default() {
    let (services, _corpus) = create_published_services(HAMLET);

    let (status, _, body) = get(http::router(services.clone()), "/autocomplete?top=%207%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 25);

    let (_, _, body) = get(http::router(services), "/autocomplete?top=7").await;
    assert_eq!(body.lines().count(), 7);
}

#[tokio::test]
async fn test_completion_summary_survives_logging_layer() {
    let (services, _corpus) = create_published_services(HAMLET);

    let response = http::router(services.clone())
        .oneshot(
            Request::builder()
                .uri("/autocomplete?term=t&top=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.extensions().get::<CompletionSummary>(),
        Some(&CompletionSummary {
            term: "t".to_string(),
            results: 3,
        })
    );

    let response = http::router(services)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.extensions().get::<CompletionSummary>().is_none());
}
