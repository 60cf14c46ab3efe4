//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod query;
pub mod serve;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use query::QueryArgs;
pub use serve::ServeArgs;
pub use stats::StatsArgs;
