//! Linguistic annotation seams.
//!
//! Tokenization and grammatical-category tagging are external concerns.
//! The core consumes them through the [`Tokenizer`] and [`PosTagger`]
//! traits so tests can inject deterministic fakes, and ships rule-based
//! default implementations good enough for English prose.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Splits raw text into word tokens.
pub trait Tokenizer {
    /// Split `text` into an ordered sequence of tokens.
    ///
    /// Tokens keep their original case; downstream normalization handles
    /// lowercasing and the alphabetic-only filter.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a grammatical-category tag to each token.
pub trait PosTagger {
    /// Tag `tokens`, preserving order. Returns one `(token, tag)` pair per
    /// input token.
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

/// Regex matching a run of word characters, apostrophes, or hyphens.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w'-]+").expect("valid regex"));

/// Default whitespace-and-punctuation tokenizer.
///
/// Extracts maximal runs of word characters (plus inner apostrophes and
/// hyphens), dropping surrounding punctuation. Contractions like "don't"
/// survive as single tokens; they are later rejected by the alphabetic
/// filter, matching the behavior of word-level corpus normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_PATTERN
            .find_iter(text)
            .map(|m| {
                m.as_str()
                    .trim_matches(|c: char| c == '\'' || c == '-')
                    .to_string()
            })
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Closed-class word inventories for the rule tagger.
static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no"]
        .into_iter()
        .collect()
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours",
        "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs",
        "who", "whom", "what", "which",
    ]
    .into_iter()
    .collect()
});

static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "of", "in", "on", "at", "to", "by", "for", "with", "from", "about", "into", "through",
        "during", "before", "after", "above", "below", "between", "under", "over", "against",
        "upon", "within", "without",
    ]
    .into_iter()
    .collect()
});

static CONJUNCTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "as"].into_iter().collect());

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    ]
    .into_iter()
    .collect()
});

/// Coarse grammatical-category tags emitted by [`RuleTagger`].
pub mod tags {
    /// Determiner.
    pub const DET: &str = "DET";
    /// Pronoun.
    pub const PRON: &str = "PRON";
    /// Preposition.
    pub const PREP: &str = "PREP";
    /// Conjunction.
    pub const CONJ: &str = "CONJ";
    /// Verb (including auxiliaries).
    pub const VERB: &str = "VERB";
    /// Adverb.
    pub const ADV: &str = "ADV";
    /// Adjective.
    pub const ADJ: &str = "ADJ";
    /// Numeral.
    pub const NUM: &str = "NUM";
    /// Noun (the fallback open class).
    pub const NOUN: &str = "NOUN";
    /// Anything unclassifiable.
    pub const X: &str = "X";
}

/// Deterministic rule-based part-of-speech tagger.
///
/// Closed-class words are looked up in fixed inventories; open-class words
/// are classified by suffix. Coarse and imperfect, but fully deterministic,
/// which is what the comparative statistics need: both corpora are tagged by
/// the same rules, so systematic tagger error cancels out of the comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    fn tag_word(word: &str) -> &'static str {
        let lower = word.to_lowercase();
        if DETERMINERS.contains(lower.as_str()) {
            return tags::DET;
        }
        if PRONOUNS.contains(lower.as_str()) {
            return tags::PRON;
        }
        if PREPOSITIONS.contains(lower.as_str()) {
            return tags::PREP;
        }
        if CONJUNCTIONS.contains(lower.as_str()) {
            return tags::CONJ;
        }
        if AUXILIARIES.contains(lower.as_str()) {
            return tags::VERB;
        }
        if lower.chars().all(|c| c.is_ascii_digit()) {
            return tags::NUM;
        }
        if !lower.chars().all(char::is_alphabetic) {
            return tags::X;
        }
        Self::tag_by_suffix(&lower)
    }

    fn tag_by_suffix(lower: &str) -> &'static str {
        // Order matters: longer, more specific suffixes first.
        if lower.len() > 4 && lower.ends_with("ly") {
            tags::ADV
        } else if lower.len() > 5
            && (lower.ends_with("able") || lower.ends_with("ible") || lower.ends_with("ous"))
        {
            tags::ADJ
        } else if lower.len() > 4 && (lower.ends_with("ful") || lower.ends_with("ive")) {
            tags::ADJ
        } else if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            tags::VERB
        } else if lower.len() > 3 && (lower.ends_with("ize") || lower.ends_with("ise")) {
            tags::VERB
        } else {
            tags::NOUN
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|t| (t.clone(), Self::tag_word(t).to_string()))
            .collect()
    }
}
