//! Autocomplete - word frequency prefix completion
//!
//! Loads a text corpus once, counts every alphabetic word and answers
//! "which N most frequent words start with this prefix" over HTTP or
//! from the command line.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - index (tokenizer, frequency counts, one-shot publication)
//!   - search (prefix selection and ranking)
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, middleware
//!
//! - **cli**: clap adapter (depends on core and http)
//!
//! The index is built on a background task while the server already
//! accepts requests. Until it is published every query returns an
//! empty result.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{AutocompleteError, Result};
pub use core::index::{FrequencyIndex, IndexHandle, IndexStatus};
pub use core::search::AutocompleteService;
pub use core::services::Services;
pub use core::types::*;
