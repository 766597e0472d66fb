//! Corpus construction and length equalization.
//!
//! A [`CorpusSet`] holds one normalized word sequence per author label,
//! including the reserved unknown-sample label. It is built once per run
//! via [`CorpusSetBuilder`] and read-only afterwards.

use indexmap::IndexMap;

use crate::annotate::Tokenizer;
use crate::attribution::reports::{AuthorWordCount, CorpusSummary};
use crate::error::{AttributionError, AttributionResult};

/// Normalize raw text into lowercase alphabetic word tokens.
///
/// Tokens containing digits, punctuation, or any non-alphabetic character
/// are dropped entirely.
pub fn normalize<T: Tokenizer>(text: &str, tokenizer: &T) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .map(|t| t.to_lowercase())
        .collect()
}

/// One normalized word sequence per author, immutable once built.
///
/// Author order is insertion order, which fixes the tie-break order of
/// every downstream verdict.
#[derive(Debug, Clone)]
pub struct CorpusSet {
    corpora: IndexMap<String, Vec<String>>,
    unknown_label: String,
}

impl CorpusSet {
    /// Start building a corpus set with the given reserved unknown label.
    pub fn builder<S: Into<String>>(unknown_label: S) -> CorpusSetBuilder {
        CorpusSetBuilder {
            corpora: IndexMap::new(),
            unknown_label: unknown_label.into(),
            unknown: None,
        }
    }

    /// The reserved label of the unknown sample.
    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }

    /// The unknown sample's word sequence.
    pub fn unknown(&self) -> &[String] {
        // Validated at build time.
        &self.corpora[&self.unknown_label]
    }

    /// Word sequence for `author`, if present.
    pub fn get(&self, author: &str) -> Option<&[String]> {
        self.corpora.get(author).map(Vec::as_slice)
    }

    /// All corpora (including the unknown sample) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.corpora.iter().map(|(a, w)| (a.as_str(), w.as_slice()))
    }

    /// Known authors (everything except the unknown sample) in insertion order.
    pub fn known_authors(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(a, _)| *a != self.unknown_label)
    }

    /// Number of corpora, unknown sample included.
    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    /// Whether the set holds no corpora. Always `false` for a built set.
    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    /// Compute the shared truncation length and per-author diagnostics.
    ///
    /// The truncation length is the minimum corpus length across all
    /// authors. Every bias-sensitive test slices corpora to this common
    /// prefix; unequal sample sizes would otherwise skew frequency-based
    /// comparisons.
    #[tracing::instrument(skip_all)]
    pub fn shortest_corpus(&self) -> AttributionResult<CorpusSummary> {
        let word_counts: Vec<AuthorWordCount> = self
            .corpora
            .iter()
            .map(|(author, words)| AuthorWordCount {
                author: author.clone(),
                words: words.len(),
            })
            .collect();

        let shortest_len = word_counts
            .iter()
            .map(|c| c.words)
            .min()
            .ok_or(AttributionError::NoCorpora)?;

        if shortest_len == 0 {
            return Err(AttributionError::DegenerateCorpus { length: 0 });
        }

        tracing::debug!(shortest_len, corpora = word_counts.len(), "equalized corpus lengths");

        Ok(CorpusSummary {
            word_counts,
            shortest_len,
        })
    }
}

/// Builder for [`CorpusSet`]; validates the set on [`build`](Self::build).
#[derive(Debug)]
pub struct CorpusSetBuilder {
    corpora: IndexMap<String, Vec<String>>,
    unknown_label: String,
    unknown: Option<Vec<String>>,
}

impl CorpusSetBuilder {
    /// Add a known author's corpus from raw text.
    ///
    /// Re-adding a label replaces the previous corpus. The reserved unknown
    /// label is routed to the unknown slot.
    pub fn add_text<T: Tokenizer>(self, author: &str, text: &str, tokenizer: &T) -> Self {
        self.add_tokens(author, normalize(text, tokenizer))
    }

    /// Add a known author's corpus from pre-normalized tokens.
    pub fn add_tokens(mut self, author: &str, tokens: Vec<String>) -> Self {
        if author == self.unknown_label {
            self.unknown = Some(tokens);
        } else {
            self.corpora.insert(author.to_string(), tokens);
        }
        self
    }

    /// Set the unknown sample from raw text.
    pub fn unknown_text<T: Tokenizer>(self, text: &str, tokenizer: &T) -> Self {
        let tokens = normalize(text, tokenizer);
        self.unknown_tokens(tokens)
    }

    /// Set the unknown sample from pre-normalized tokens.
    pub fn unknown_tokens(mut self, tokens: Vec<String>) -> Self {
        self.unknown = Some(tokens);
        self
    }

    /// Validate and freeze the corpus set.
    ///
    /// The unknown sample is appended after all known authors, so known
    /// authors keep their insertion order for tie-break purposes.
    pub fn build(self) -> AttributionResult<CorpusSet> {
        let Self {
            mut corpora,
            unknown_label,
            unknown,
        } = self;

        if corpora.is_empty() && unknown.is_none() {
            return Err(AttributionError::NoCorpora);
        }
        let unknown = unknown.ok_or_else(|| AttributionError::MissingUnknown {
            label: unknown_label.clone(),
        })?;
        if corpora.is_empty() {
            return Err(AttributionError::NoKnownAuthors {
                label: unknown_label.clone(),
            });
        }

        for (author, words) in &corpora {
            if words.is_empty() {
                return Err(AttributionError::EmptyCorpus {
                    author: author.clone(),
                });
            }
        }
        if unknown.is_empty() {
            return Err(AttributionError::EmptyCorpus {
                author: unknown_label.clone(),
            });
        }

        corpora.insert(unknown_label.clone(), unknown);

        Ok(CorpusSet {
            corpora,
            unknown_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::WordTokenizer;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn normalize_keeps_only_alphabetic_lowercase() {
        let words = normalize("The YEAR was 1898, wasn't it?", &WordTokenizer);
        assert_eq!(words, vec!["the", "year", "was", "it"]);
    }

    #[test]
    fn build_requires_unknown_sample() {
        let err = CorpusSet::builder("unknown")
            .add_tokens("doyle", tokens(&["a", "b"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, AttributionError::MissingUnknown { .. }));
    }

    #[test]
    fn build_requires_known_authors() {
        let err = CorpusSet::builder("unknown")
            .unknown_tokens(tokens(&["a"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, AttributionError::NoKnownAuthors { .. }));
    }

    #[test]
    fn build_rejects_empty_corpus() {
        let err = CorpusSet::builder("unknown")
            .add_tokens("doyle", Vec::new())
            .unknown_tokens(tokens(&["a"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, AttributionError::EmptyCorpus { ref author } if author == "doyle"));
    }

    #[test]
    fn build_rejects_nothing_at_all() {
        let err = CorpusSet::builder("unknown").build().unwrap_err();
        assert!(matches!(err, AttributionError::NoCorpora));
    }

    #[test]
    fn unknown_label_routed_through_add() {
        let set = CorpusSet::builder("unknown")
            .add_tokens("doyle", tokens(&["a", "b"]))
            .add_tokens("unknown", tokens(&["c"]))
            .build()
            .unwrap();
        assert_eq!(set.unknown(), tokens(&["c"]).as_slice());
    }

    #[test]
    fn known_authors_excludes_unknown() {
        let set = CorpusSet::builder("unknown")
            .add_tokens("doyle", tokens(&["a"]))
            .add_tokens("wells", tokens(&["b"]))
            .unknown_tokens(tokens(&["c"]))
            .build()
            .unwrap();
        let known: Vec<&str> = set.known_authors().map(|(a, _)| a).collect();
        assert_eq!(known, vec!["doyle", "wells"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn shortest_corpus_is_minimum_length() {
        // Lengths 10, 14, and 8: the shared truncation length must be 8.
        let set = CorpusSet::builder("unknown")
            .add_tokens("doyle", vec!["w".to_string(); 10])
            .add_tokens("wells", vec!["w".to_string(); 14])
            .unknown_tokens(vec!["w".to_string(); 8])
            .build()
            .unwrap();
        let summary = set.shortest_corpus().unwrap();
        assert_eq!(summary.shortest_len, 8);
        assert_eq!(summary.word_counts.len(), 3);
        assert_eq!(summary.word_counts[0].words, 10);
        assert_eq!(summary.word_counts[2].words, 8);
    }
}
