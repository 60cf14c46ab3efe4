//! Prefix autocomplete over the published index.
//!
//! This module provides the AutocompleteService. It is stateless per
//! call: every query reads whatever the shared handle holds at that
//! moment and never waits for a build to finish.

use crate::core::index::{IndexHandle, WordCount};
use crate::core::search::query::{resolve_limit, AutocompleteQuery};
use crate::core::search::ranking::top_ranked;
use std::sync::Arc;

/// Prefix autocomplete service
pub struct AutocompleteService {
    index: Arc<IndexHandle>,
    default_top: usize,
}

impl AutocompleteService {
    /// Create a new autocomplete service
    pub fn new(index: Arc<IndexHandle>, default_top: usize) -> Self {
        Self { index, default_top }
    }

    /// Execute a query as received from a caller
    pub fn query(&self, query: &AutocompleteQuery) -> Vec<String> {
        self.complete(&query.term, query.top.as_deref())
    }

    /// Complete `term`, resolving the raw `top` parameter first
    pub fn complete(&self, term: &str, top: Option<&str>) -> Vec<String> {
        let limit = resolve_limit(top, self.default_top);
        self.complete_with_limit(term, limit)
    }

    /// Complete `term` with an already parsed limit.
    ///
    /// Returns an empty list if the index is not published yet or
    /// `limit <= 0`.
    pub fn complete_with_limit(&self, term: &str, limit: i64) -> Vec<String> {
        self.ranked(term, limit)
            .into_iter()
            .map(|entry| entry.word.clone())
            .collect()
    }

    /// Like `complete_with_limit`, keeping the counts
    pub fn ranked(&self, term: &str, limit: i64) -> Vec<&WordCount> {
        let Some(index) = self.index.get() else {
            return Vec::new();
        };
        if limit <= 0 {
            return Vec::new();
        }

        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        top_ranked(index.with_prefix(term), limit)
    }

    pub fn default_top(&self) -> usize {
        self.default_top
    }

    pub fn index(&self) -> &Arc<IndexHandle> {
        &self.index
    }
}

/// Render words as newline-terminated lines
pub fn render_lines<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.as_ref().len() + 1).sum());
    for word in words {
        out.push_str(word.as_ref());
        out.push('\n');
    }
    out
}
