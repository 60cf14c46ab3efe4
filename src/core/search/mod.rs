//! Search module for prefix autocomplete.
//!
//! This module filters the published index by prefix and ranks the
//! matches by frequency.

mod engine;
mod query;
mod ranking;

pub use engine::{render_lines, AutocompleteService};
pub use query::{parse_limit, resolve_limit, AutocompleteQuery};
pub use ranking::{by_frequency, top_ranked};
