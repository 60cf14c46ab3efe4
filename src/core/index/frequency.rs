//! Immutable word frequency index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A word and the number of times it occurred in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Statistics collected while building an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Raw tokens produced by the tokenizer, including rejected ones
    pub tokens_scanned: u64,
    /// Tokens accepted as words
    pub words_accepted: u64,
    /// Distinct words in the index
    pub distinct_words: usize,
    /// Build time in milliseconds
    pub duration_ms: u64,
    /// When the build finished
    pub built_at: DateTime<Utc>,
}

impl IndexStats {
    /// Tokens thrown away by the tokenizer
    pub fn tokens_rejected(&self) -> u64 {
        self.tokens_scanned - self.words_accepted
    }
}

/// Word to count mapping, read-only once constructed.
///
/// Entries are kept sorted by word (byte order), so every word
/// sharing a prefix sits in one contiguous run that
/// [`FrequencyIndex::with_prefix`] finds by binary search.
#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    entries: Vec<WordCount>,
    stats: IndexStats,
}

impl FrequencyIndex {
    pub(crate) fn from_map(counts: HashMap<String, u64>, mut stats: IndexStats) -> Self {
        let mut entries: Vec<WordCount> = counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();
        entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        stats.distinct_words = entries.len();

        Self { entries, stats }
    }

    /// Build an index straight from known counts.
    ///
    /// Repeated words have their counts summed.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut map: HashMap<String, u64> = HashMap::new();
        for (word, count) in counts {
            *map.entry(word.into()).or_insert(0) += count;
        }
        let total: u64 = map.values().sum();

        Self::from_map(
            map,
            IndexStats {
                tokens_scanned: total,
                words_accepted: total,
                distinct_words: 0,
                duration_ms: 0,
                built_at: Utc::now(),
            },
        )
    }

    /// Occurrence count of an exact word
    pub fn count(&self, word: &str) -> Option<u64> {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .ok()
            .map(|i| self.entries[i].count)
    }

    /// All entries whose word starts with `prefix`, in word order.
    ///
    /// The comparison is byte-wise and case-sensitive. An empty
    /// prefix returns every entry.
    pub fn with_prefix(&self, prefix: &str) -> &[WordCount] {
        let start = self
            .entries
            .partition_point(|entry| entry.word.as_str() < prefix);
        let len = self.entries[start..].partition_point(|entry| entry.word.starts_with(prefix));
        &self.entries[start..start + len]
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
