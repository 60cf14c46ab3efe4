//! Frequency index construction.
//!
//! The builder owns its counts privately for the whole build. Only
//! the finished [`FrequencyIndex`] is ever handed to the publisher,
//! so no reader can observe a half-counted map.

use crate::core::error::{AutocompleteError, Result};
use crate::core::index::frequency::{FrequencyIndex, IndexStats};
use crate::core::index::tokenizer::{scan, Token};
use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Accumulates word counts from corpus text.
#[derive(Debug)]
pub struct IndexBuilder {
    counts: HashMap<String, u64>,
    tokens_scanned: u64,
    words_accepted: u64,
    started: Instant,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            tokens_scanned: 0,
            words_accepted: 0,
            started: Instant::now(),
        }
    }

    /// Tokenize `text` and count every accepted word.
    pub fn add_text(&mut self, text: &str) {
        for token in scan(text) {
            self.tokens_scanned += 1;
            if let Token::Word(word) = token {
                self.record(word);
            }
        }
    }

    fn record(&mut self, word: &str) {
        self.words_accepted += 1;
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Freeze the counts into an index.
    pub fn finish(self) -> FrequencyIndex {
        let stats = IndexStats {
            tokens_scanned: self.tokens_scanned,
            words_accepted: self.words_accepted,
            distinct_words: self.counts.len(),
            duration_ms: self.started.elapsed().as_millis() as u64,
            built_at: Utc::now(),
        };
        FrequencyIndex::from_map(self.counts, stats)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyIndex {
    /// Build an index from an in-memory corpus
    pub fn from_text(text: &str) -> Self {
        let mut builder = IndexBuilder::new();
        builder.add_text(text);
        builder.finish()
    }
}

/// Read a corpus file and build its index.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, which is not
/// alphabetic, so tokens containing them are rejected.
///
/// # Errors
///
/// - `CorpusUnavailable`: the file is missing or cannot be read
pub fn build_from_file(path: &Path) -> Result<FrequencyIndex> {
    tracing::info!(corpus = %path.display(), "Building frequency index");

    let bytes = fs::read(path).map_err(|source| AutocompleteError::CorpusUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut builder = IndexBuilder::new();
    builder.add_text(&String::from_utf8_lossy(&bytes));
    let index = builder.finish();

    let stats = index.stats();
    tracing::info!(
        corpus = %path.display(),
        bytes = bytes.len(),
        tokens = stats.tokens_scanned,
        rejected = stats.tokens_rejected(),
        words = stats.distinct_words,
        duration_ms = stats.duration_ms,
        "Frequency index built"
    );

    Ok(index)
}
