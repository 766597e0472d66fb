//! Report structs for attribution runs.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and downstream tooling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Word count diagnostic for one corpus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthorWordCount {
    /// Author label (or the reserved unknown label).
    pub author: String,
    /// Number of normalized word tokens in the corpus.
    pub words: usize,
}

/// Per-corpus lengths and the shared truncation length.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CorpusSummary {
    /// Word counts per corpus, in corpus insertion order.
    pub word_counts: Vec<AuthorWordCount>,
    /// The minimum corpus length; every bias-sensitive test slices corpora
    /// to this common prefix.
    pub shortest_len: usize,
}

/// One category and its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DistributionEntry {
    /// Category value (word length, stopword, or grammatical tag).
    pub category: String,
    /// Occurrence count.
    pub count: usize,
}

/// Frequency distribution for one author, cut to the display top-K.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthorDistribution {
    /// Author label.
    pub author: String,
    /// Total qualifying tokens counted (equals the truncation length for
    /// the word-length test; may be smaller for stopword and POS tests).
    pub total: usize,
    /// Top-K categories by descending count.
    pub entries: Vec<DistributionEntry>,
}

/// A descriptive frequency-distribution test across all corpora.
///
/// Strictly descriptive: the engine never ranks authors against each other
/// here, it only hands labeled distributions to the caller for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DistributionReport {
    /// Display label for the test (e.g., "Word Length").
    pub label: String,
    /// Requested top-K display cutoff.
    pub top_k: usize,
    /// One distribution per corpus, unknown sample included.
    pub authors: Vec<AuthorDistribution>,
}

/// Score for one known author under a decision test.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthorScore {
    /// Known-author label.
    pub author: String,
    /// Test score (chi-squared statistic or Jaccard coefficient).
    pub score: f64,
}

/// Chi-squared vocabulary divergence results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChiSquaredReport {
    /// Scores per known author; lower indicates closer fit.
    pub scores: Vec<AuthorScore>,
    /// The argmin verdict (first-encountered author wins ties).
    pub most_likely: String,
}

/// Jaccard lexical similarity results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JaccardReport {
    /// Scores per known author; higher indicates closer fit.
    pub scores: Vec<AuthorScore>,
    /// The argmax verdict (first-encountered author wins ties).
    pub most_likely: String,
}

/// Full attribution report combining all five tests.
///
/// The two decision tests are reported independently; nothing reconciles a
/// disagreement between them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AttributionReport {
    /// Corpus lengths and truncation length diagnostics.
    pub summary: CorpusSummary,
    /// Word-length distribution test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_length: Option<DistributionReport>,
    /// Stopword usage distribution test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<DistributionReport>,
    /// Grammatical-category distribution test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_of_speech: Option<DistributionReport>,
    /// Chi-squared vocabulary divergence test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chi_squared: Option<ChiSquaredReport>,
    /// Jaccard lexical similarity test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jaccard: Option<JaccardReport>,
}
