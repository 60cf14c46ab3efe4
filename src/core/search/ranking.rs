//! Frequency ranking of prefix matches.

use crate::core::index::WordCount;
use std::cmp::Ordering;

/// Ranking order: count descending, then word ascending.
///
/// Words are unique within an index, so this is a total order and
/// the ranking never depends on input order.
pub fn by_frequency(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// The best `limit` entries of `matches`, best first.
///
/// Only the head of the candidate list is fully sorted; the rest is
/// partitioned away with `select_nth_unstable_by`.
pub fn top_ranked(matches: &[WordCount], limit: usize) -> Vec<&WordCount> {
    if limit == 0 || matches.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&WordCount> = matches.iter().collect();
    if limit < ranked.len() {
        ranked.select_nth_unstable_by(limit, |a, b| by_frequency(a, b));
        ranked.truncate(limit);
    }
    ranked.sort_unstable_by(|a, b| by_frequency(a, b));
    ranked
}
