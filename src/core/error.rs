//! Error types and error handling for the autocomplete service.
//!
//! This module defines the error types used throughout the
//! application. None of them are fatal to a running server: build
//! errors are recorded on the index handle and query parameter
//! errors are recovered where they occur.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for autocomplete operations
pub type Result<T> = std::result::Result<T, AutocompleteError>;

/// Main error type for the autocomplete service
#[derive(Error, Debug)]
pub enum AutocompleteError {
    #[error("Corpus unavailable at {}: {source}", path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Index already finalized")]
    AlreadyFinalized,

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AutocompleteError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came out of the index build
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            AutocompleteError::CorpusUnavailable { .. } | AutocompleteError::IndexingFailed(_)
        )
    }

    /// Check if the caller can substitute a default and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AutocompleteError::InvalidLimit(_))
    }
}
