//! Tests for the query CLI command

use crate::common::{create_test_services, missing_corpus_services, TestCorpus, HAMLET, TIE_CORPUS};
use autocomplete::cli::commands::query::{complete, execute, QueryArgs};
use autocomplete::cli::OutputFormat;
use autocomplete::core::config::Config;
use std::path::PathBuf;

fn args(term: &str, top: Option<&str>) -> QueryArgs {
    QueryArgs {
        term: term.to_string(),
        top: top.map(str::to_string),
        corpus: None,
        counts: false,
    }
}

#[tokio::test]
async fn test_query_human() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());

    let result = execute(args("t", Some("3")), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Query should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_query_json_with_counts() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());

    let mut query = args("", None);
    query.counts = true;
    let result = execute(query, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON query should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_query_missing_corpus_fails() {
    let services = missing_corpus_services();

    let result = execute(args("t", None), &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Indexing failed"));
}

#[test]
fn test_complete_response_ranks_with_counts() {
    let corpus = TestCorpus::new(TIE_CORPUS);
    let services = create_test_services(corpus.path());
    services.build_index_now().unwrap();

    let response = complete(&args("th", Some("10")), &services);
    assert_eq!(response.term, "th");
    assert_eq!(response.limit, 10);
    assert_eq!(response.count, 3);

    let ranked: Vec<(usize, &str, u64)> = response
        .results
        .iter()
        .map(|c| (c.rank, c.word.as_str(), c.count))
        .collect();
    assert_eq!(ranked, vec![(1, "the", 3), (2, "this", 3), (3, "that", 1)]);
}

#[test]
fn test_complete_response_bad_top_uses_default() {
    let corpus = TestCorpus::new(HAMLET);
    let services = create_test_services(corpus.path());
    services.build_index_now().unwrap();

    let response = complete(&args("", Some("lots")), &services);
    assert_eq!(response.limit, 25);
    assert_eq!(response.count, 25);
}

#[test]
fn test_corpus_override() {
    let query = QueryArgs {
        corpus: Some(PathBuf::from("other.txt")),
        ..args("a", None)
    };
    let mut config = Config::default();
    query.apply(&mut config);
    assert_eq!(config.corpus.path, PathBuf::from("other.txt"));
}
