//! Core data types for the autocomplete service.
//!
//! Response structures shared by the HTTP and CLI adapters.

use crate::core::index::{IndexHandle, IndexStatus};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving
    pub status: String,

    /// Crate version
    pub version: String,

    /// Index lifecycle state
    pub index: IndexStatus,

    /// Distinct words once the index is ready
    pub words: Option<usize>,

    /// Build error message if the build failed
    pub error: Option<String>,
}

impl HealthResponse {
    /// Snapshot the current state of an index handle
    pub fn from_handle(handle: &IndexHandle) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            index: handle.status(),
            words: handle.get().map(|index| index.len()),
            error: handle.failure().map(|e| e.message()),
        }
    }
}

/// A ranked completion with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// 1-based rank
    pub rank: usize,
    pub word: String,
    pub count: u64,
}

/// Completions for one term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub term: String,
    pub limit: i64,
    pub count: usize,
    pub results: Vec<Completion>,
}
