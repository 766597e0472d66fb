//! Frequency distributions with deterministic ordering.
//!
//! Built on [`IndexMap`] so categories keep first-encountered order, which
//! gives `most_common` a stable, reproducible tie-break.

use std::hash::Hash;

use indexmap::IndexMap;

/// A count per category value over a token sequence.
///
/// Categories are stored in first-encountered order. Never mutated after
/// construction by the attribution tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqDist<C: Eq + Hash> {
    counts: IndexMap<C, usize>,
}

impl<C: Eq + Hash> FreqDist<C> {
    /// Count occurrences of each category in `items`.
    pub fn count<I: IntoIterator<Item = C>>(items: I) -> Self {
        let mut counts = IndexMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the distribution has no categories at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Count for a single category (0 if absent).
    pub fn get(&self, category: &C) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// The `k` most frequent categories, ordered by descending count.
    ///
    /// Ties keep first-encountered order (stable sort over insertion order),
    /// so the result is bit-for-bit reproducible for identical input.
    pub fn most_common(&self, k: usize) -> Vec<(&C, usize)> {
        let mut entries: Vec<(&C, usize)> = self.counts.iter().map(|(c, &n)| (c, n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }

    /// Iterate over `(category, count)` pairs in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, usize)> {
        self.counts.iter().map(|(c, &n)| (c, n))
    }
}
