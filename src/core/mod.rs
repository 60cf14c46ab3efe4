//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Response data structures
//! - **index**: Tokenizer, frequency index, builder and publisher
//! - **search**: Prefix filtering and frequency ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{AutocompleteError, Result};
pub use services::Services;
