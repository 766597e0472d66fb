//! Descriptive frequency-distribution tests.
//!
//! Word length, stopword usage, and grammatical category, each computed
//! over the shared truncated prefix of every corpus. Computation is pure;
//! rendering belongs to the caller.

use std::collections::HashSet;

use crate::annotate::PosTagger;
use crate::corpus::CorpusSet;
use crate::freq::FreqDist;

use super::reports::{AuthorDistribution, DistributionEntry, DistributionReport};

/// Truncate a word sequence to the shared prefix length.
fn truncated(words: &[String], shortest_len: usize) -> &[String] {
    &words[..shortest_len.min(words.len())]
}

/// Build a display-ready distribution from a frequency distribution.
fn to_author_distribution(author: &str, dist: &FreqDist<String>, top_k: usize) -> AuthorDistribution {
    AuthorDistribution {
        author: author.to_string(),
        total: dist.total(),
        entries: dist
            .most_common(top_k)
            .into_iter()
            .map(|(category, count)| DistributionEntry {
                category: category.clone(),
                count,
            })
            .collect(),
    }
}

/// Word-length distributions over the truncated corpora.
///
/// Category = character length of the token. The total count equals the
/// truncation length exactly for every author.
#[tracing::instrument(skip_all, fields(shortest_len, top_k))]
pub fn word_length_distributions(
    set: &CorpusSet,
    shortest_len: usize,
    top_k: usize,
) -> DistributionReport {
    let authors = set
        .iter()
        .map(|(author, words)| {
            let dist = FreqDist::count(
                truncated(words, shortest_len)
                    .iter()
                    .map(|w| w.chars().count().to_string()),
            );
            to_author_distribution(author, &dist, top_k)
        })
        .collect();

    DistributionReport {
        label: "Word Length".to_string(),
        top_k,
        authors,
    }
}

/// Stopword distributions over the truncated corpora.
///
/// The truncated sequence is filtered to tokens present in `stop_words`
/// before counting, so totals may fall short of the truncation length.
#[tracing::instrument(skip_all, fields(shortest_len, top_k))]
pub fn stopword_distributions(
    set: &CorpusSet,
    shortest_len: usize,
    stop_words: &HashSet<&str>,
    top_k: usize,
) -> DistributionReport {
    let authors = set
        .iter()
        .map(|(author, words)| {
            let dist = FreqDist::count(
                truncated(words, shortest_len)
                    .iter()
                    .filter(|w| stop_words.contains(w.as_str()))
                    .cloned(),
            );
            to_author_distribution(author, &dist, top_k)
        })
        .collect();

    DistributionReport {
        label: "Most Common Stopwords".to_string(),
        top_k,
        authors,
    }
}

/// Grammatical-category distributions over the truncated corpora.
///
/// Each truncated sequence is tagged once by the injected tagger, then the
/// tags (not the tokens) are counted.
#[tracing::instrument(skip_all, fields(shortest_len, top_k))]
pub fn pos_distributions<P: PosTagger>(
    set: &CorpusSet,
    shortest_len: usize,
    tagger: &P,
    top_k: usize,
) -> DistributionReport {
    let authors = set
        .iter()
        .map(|(author, words)| {
            let tagged = tagger.tag(truncated(words, shortest_len));
            let dist = FreqDist::count(tagged.into_iter().map(|(_, tag)| tag));
            to_author_distribution(author, &dist, top_k)
        })
        .collect();

    DistributionReport {
        label: "Parts of Speech".to_string(),
        top_k,
        authors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::RuleTagger;

    fn corpus_set(entries: &[(&str, &[&str])], unknown: &[&str]) -> CorpusSet {
        let mut builder = CorpusSet::builder("unknown");
        for (author, words) in entries {
            builder = builder.add_tokens(author, words.iter().map(ToString::to_string).collect());
        }
        builder
            .unknown_tokens(unknown.iter().map(ToString::to_string).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn word_length_total_equals_truncation_length() {
        let set = corpus_set(
            &[("doyle", &["the", "hound", "of", "the", "baskervilles"])],
            &["a", "strange", "light"],
        );
        let shortest = set.shortest_corpus().unwrap().shortest_len;
        assert_eq!(shortest, 3);

        let report = word_length_distributions(&set, shortest, 15);
        for author in &report.authors {
            assert_eq!(author.total, shortest);
        }
    }

    #[test]
    fn word_length_categories_are_lengths() {
        let set = corpus_set(&[("a", &["ab", "cd", "efg"])], &["hi", "jk", "lm"]);
        let report = word_length_distributions(&set, 3, 15);
        let doyle = &report.authors[0];
        assert_eq!(doyle.entries[0].category, "2");
        assert_eq!(doyle.entries[0].count, 2);
    }

    #[test]
    fn stopword_filter_excludes_content_words() {
        let set = corpus_set(
            &[("a", &["the", "hound", "of", "doom"])],
            &["the", "war", "of", "worlds"],
        );
        let stop_words: HashSet<&str> = ["the", "of"].into_iter().collect();
        let report = stopword_distributions(&set, 4, &stop_words, 50);

        // Only "the" and "of" survive the filter in both corpora.
        for author in &report.authors {
            assert_eq!(author.total, 2);
            let categories: Vec<&str> =
                author.entries.iter().map(|e| e.category.as_str()).collect();
            assert!(categories.contains(&"the"));
            assert!(categories.contains(&"of"));
        }
    }

    #[test]
    fn pos_counts_tags_not_tokens() {
        let set = corpus_set(&[("a", &["the", "dog", "ran"])], &["a", "cat", "sat"]);
        let report = pos_distributions(&set, 3, &RuleTagger, 35);
        let first = &report.authors[0];
        assert_eq!(first.total, 3);
        let categories: Vec<&str> = first.entries.iter().map(|e| e.category.as_str()).collect();
        assert!(categories.contains(&"DET"));
        assert!(categories.contains(&"NOUN"));
    }

    #[test]
    fn pos_uses_injected_tagger() {
        struct ConstTagger;
        impl PosTagger for ConstTagger {
            fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
                tokens
                    .iter()
                    .map(|t| (t.clone(), "TAG".to_string()))
                    .collect()
            }
        }

        let set = corpus_set(&[("a", &["x", "y", "z"])], &["p", "q", "r"]);
        let report = pos_distributions(&set, 3, &ConstTagger, 35);
        for author in &report.authors {
            assert_eq!(author.entries.len(), 1);
            assert_eq!(author.entries[0].category, "TAG");
            assert_eq!(author.entries[0].count, 3);
        }
    }

    #[test]
    fn top_k_limits_entries() {
        let words: Vec<String> = (1..=30).map(|n| "x".repeat(n)).collect();
        let set = CorpusSet::builder("unknown")
            .add_tokens("a", words.clone())
            .unknown_tokens(words)
            .build()
            .unwrap();
        let report = word_length_distributions(&set, 30, 15);
        assert!(report.authors.iter().all(|a| a.entries.len() <= 15));
    }

    #[test]
    fn distributions_are_deterministic() {
        let set = corpus_set(
            &[("a", &["one", "two", "two", "six", "ten"])],
            &["one", "two", "six", "ten", "ten"],
        );
        let first = word_length_distributions(&set, 5, 15);
        let second = word_length_distributions(&set, 5, 15);
        for (x, y) in first.authors.iter().zip(second.authors.iter()) {
            assert_eq!(x.total, y.total);
            for (e1, e2) in x.entries.iter().zip(y.entries.iter()) {
                assert_eq!(e1.category, e2.category);
                assert_eq!(e1.count, e2.count);
            }
        }
    }
}
