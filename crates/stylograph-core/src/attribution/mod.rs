//! Authorship attribution tests.
//!
//! Five independent tests over the same normalized corpora, orchestrated by
//! [`run_attribution`]: three descriptive distribution tests (word length,
//! stopwords, grammatical category) and two decision tests (chi-squared
//! vocabulary divergence, Jaccard lexical similarity).
//!
//! Each test is a pure function in its own module. Callers can also invoke
//! tests individually.

pub mod chi_squared;
pub mod distributions;
pub mod jaccard;
pub mod reports;

use std::collections::HashSet;

pub use reports::AttributionReport;

use crate::annotate::PosTagger;
use crate::corpus::CorpusSet;
use crate::error::AttributionResult;
use crate::word_lists::STOP_WORDS;

/// All available test names.
pub const ALL_TESTS: &[&str] = &[
    "word_length",
    "stopwords",
    "parts_of_speech",
    "chi_squared",
    "jaccard",
];

/// Default display cutoff for the word-length distribution.
pub const WORD_LENGTH_TOP_K: usize = 15;
/// Default display cutoff for the stopword distribution.
pub const STOPWORD_TOP_K: usize = 50;
/// Default display cutoff for the grammatical-category distribution.
pub const POS_TOP_K: usize = 35;
/// Default combined-vocabulary size for the chi-squared test.
pub const VOCAB_SIZE: usize = 1000;

/// Tuning knobs for an attribution run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Combined-vocabulary size for the chi-squared test.
    pub vocab_size: usize,
    /// Top-K cutoff for the word-length distribution.
    pub word_length_top: usize,
    /// Top-K cutoff for the stopword distribution.
    pub stopword_top: usize,
    /// Top-K cutoff for the grammatical-category distribution.
    pub pos_top: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            vocab_size: VOCAB_SIZE,
            word_length_top: WORD_LENGTH_TOP_K,
            stopword_top: STOPWORD_TOP_K,
            pos_top: POS_TOP_K,
        }
    }
}

/// Run attribution tests over a corpus set.
///
/// The truncation length is computed once and shared by the descriptive
/// tests and the Jaccard test; the chi-squared test uses the full corpora.
/// All five tests see the same normalized corpora, so results are
/// bit-for-bit reproducible for identical input.
///
/// # Arguments
///
/// * `set` — The validated corpus set (known authors plus unknown sample).
/// * `tagger` — Grammatical-category annotator for the POS test.
/// * `tests` — Optional list of test names to run. If `None`, runs all.
/// * `options` — Top-K cutoffs and chi-squared vocabulary size.
#[tracing::instrument(skip_all, fields(corpora = set.len()))]
pub fn run_attribution<P: PosTagger>(
    set: &CorpusSet,
    tagger: &P,
    tests: Option<&[String]>,
    options: &RunOptions,
) -> AttributionResult<AttributionReport> {
    let enabled: HashSet<&str> = tests.map_or_else(
        || ALL_TESTS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let summary = set.shortest_corpus()?;
    let shortest_len = summary.shortest_len;

    let word_length = if enabled.contains("word_length") {
        Some(distributions::word_length_distributions(
            set,
            shortest_len,
            options.word_length_top,
        ))
    } else {
        None
    };

    let stopwords = if enabled.contains("stopwords") {
        Some(distributions::stopword_distributions(
            set,
            shortest_len,
            &STOP_WORDS,
            options.stopword_top,
        ))
    } else {
        None
    };

    let parts_of_speech = if enabled.contains("parts_of_speech") {
        Some(distributions::pos_distributions(
            set,
            shortest_len,
            tagger,
            options.pos_top,
        ))
    } else {
        None
    };

    let chi_squared = enabled
        .contains("chi_squared")
        .then(|| chi_squared::chi_squared_scores(set, options.vocab_size));

    let jaccard = enabled
        .contains("jaccard")
        .then(|| jaccard::jaccard_scores(set, shortest_len));

    Ok(AttributionReport {
        summary,
        word_length,
        stopwords,
        parts_of_speech,
        chi_squared,
        jaccard,
    })
}
