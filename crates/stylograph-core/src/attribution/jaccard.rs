//! Jaccard lexical similarity test.
//!
//! Raw vocabulary overlap between each known author and the unknown sample,
//! independent of word frequency. Higher coefficient = closer fit.

use std::collections::HashSet;

use crate::corpus::CorpusSet;

use super::reports::{AuthorScore, JaccardReport};

/// Distinct words in the truncated prefix of a word sequence.
fn truncated_vocabulary(words: &[String], shortest_len: usize) -> HashSet<&str> {
    words[..shortest_len.min(words.len())]
        .iter()
        .map(String::as_str)
        .collect()
}

/// Compute Jaccard similarity scores for every known author.
///
/// Both vocabularies are taken over corpora truncated to `shortest_len` so
/// that unequal sample sizes cannot inflate the overlap. The coefficient is
/// `|A ∩ U| / |A ∪ U|`, always in `[0, 1]`.
#[tracing::instrument(skip_all, fields(shortest_len))]
pub fn jaccard_scores(set: &CorpusSet, shortest_len: usize) -> JaccardReport {
    let unknown_vocab = truncated_vocabulary(set.unknown(), shortest_len);

    let mut scores = Vec::new();
    for (author, words) in set.known_authors() {
        let author_vocab = truncated_vocabulary(words, shortest_len);
        let shared = author_vocab.intersection(&unknown_vocab).count();
        let union = author_vocab.len() + unknown_vocab.len() - shared;

        // Both vocabularies empty only for degenerate input rejected upstream.
        let jaccard = if union == 0 {
            0.0
        } else {
            shared as f64 / union as f64
        };

        tracing::debug!(author, jaccard, shared, "lexical similarity computed");
        scores.push(AuthorScore {
            author: author.to_string(),
            score: jaccard,
        });
    }

    // Explicit descending argmax; strict inequality keeps the
    // first-encountered author on ties.
    let most_likely = scores
        .iter()
        .fold(None::<&AuthorScore>, |best, candidate| match best {
            Some(b) if candidate.score > b.score => Some(candidate),
            Some(b) => Some(b),
            None => Some(candidate),
        })
        .map(|s| s.author.clone())
        .unwrap_or_default();

    JaccardReport {
        scores,
        most_likely,
    }
}
