//! Word frequency index.
//!
//! - **tokenizer**: splits corpus text and accepts alphabetic words
//! - **frequency**: the immutable word to count index
//! - **builder**: counts words privately and freezes the result
//! - **publisher**: one-shot handle shared with query handlers

mod builder;
mod frequency;
mod publisher;
pub mod tokenizer;

pub use builder::{build_from_file, IndexBuilder};
pub use frequency::{FrequencyIndex, IndexStats, WordCount};
pub use publisher::{IndexHandle, IndexStatus};
