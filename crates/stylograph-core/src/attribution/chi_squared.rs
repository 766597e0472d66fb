//! Chi-squared vocabulary divergence test.
//!
//! Quantifies how well each known author's vocabulary explains the unknown
//! sample's vocabulary, under the null hypothesis that both are drawn from
//! the same word-frequency process. Lower score = closer fit.
//!
//! This test deliberately uses the full, untruncated corpora: the author
//! proportion already normalizes for sample size, and the descriptive tests
//! are the only ones that need length equalization.

use crate::corpus::CorpusSet;
use crate::freq::FreqDist;

use super::reports::{AuthorScore, ChiSquaredReport};

/// Compute chi-squared divergence scores for every known author.
///
/// Per author: the author's corpus and the unknown sample are concatenated,
/// the `vocab_size` most frequent combined words are selected (ties keep
/// first-encountered order), and for each word the squared deviation of the
/// author's observed count from the proportionally expected count is
/// accumulated, normalized by the expected count.
///
/// A zero expected count would divide by zero; such terms are skipped with
/// a warning rather than poisoning the whole score. This can only happen on
/// degenerate vocabularies, since any word in the combined top list has a
/// positive combined count.
#[tracing::instrument(skip_all, fields(vocab_size))]
pub fn chi_squared_scores(set: &CorpusSet, vocab_size: usize) -> ChiSquaredReport {
    let unknown = set.unknown();

    let mut scores = Vec::new();
    for (author, words) in set.known_authors() {
        let combined: Vec<&str> = words
            .iter()
            .chain(unknown.iter())
            .map(String::as_str)
            .collect();
        let author_proportion = words.len() as f64 / combined.len() as f64;

        let combined_dist = FreqDist::count(combined.iter().copied());
        let author_dist = FreqDist::count(words.iter().map(String::as_str));

        let mut chi_squared = 0.0;
        for (word, combined_count) in combined_dist.most_common(vocab_size) {
            let observed = author_dist.get(word) as f64;
            let expected = combined_count as f64 * author_proportion;
            if expected == 0.0 {
                tracing::warn!(author, word, "zero expected count, skipping term");
                continue;
            }
            chi_squared += (observed - expected).powi(2) / expected;
        }

        tracing::debug!(author, chi_squared, "vocabulary divergence computed");
        scores.push(AuthorScore {
            author: author.to_string(),
            score: chi_squared,
        });
    }

    // Explicit ascending argmin; strict inequality keeps the
    // first-encountered author on ties.
    let most_likely = scores
        .iter()
        .fold(None::<&AuthorScore>, |best, candidate| match best {
            Some(b) if candidate.score < b.score => Some(candidate),
            Some(b) => Some(b),
            None => Some(candidate),
        })
        .map(|s| s.author.clone())
        .unwrap_or_default();

    ChiSquaredReport {
        scores,
        most_likely,
    }
}
