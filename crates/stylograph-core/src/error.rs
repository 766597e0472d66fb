//! Error types for stylograph-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building corpora or running attribution tests.
///
/// Input and degenerate-corpus errors abort the run before any partial
/// report is produced. The zero-expected-count guard inside the chi-squared
/// test is handled locally per term and never surfaces here.
#[derive(Error, Debug)]
pub enum AttributionError {
    /// No corpora were provided at all.
    #[error("no corpora provided")]
    NoCorpora,

    /// A corpus normalized down to zero word tokens.
    #[error("corpus for '{author}' contains no alphabetic word tokens")]
    EmptyCorpus {
        /// Label of the offending corpus.
        author: String,
    },

    /// No corpus carries the reserved unknown-sample label.
    #[error("no unknown sample: expected a corpus labeled '{label}'")]
    MissingUnknown {
        /// The reserved unknown label.
        label: String,
    },

    /// Only the unknown sample was provided; there is nothing to compare against.
    #[error("no known authors: only the '{label}' sample was provided")]
    NoKnownAuthors {
        /// The reserved unknown label.
        label: String,
    },

    /// The shared truncation length is unusable for comparative statistics.
    #[error("degenerate corpus: shortest corpus length is {length}")]
    DegenerateCorpus {
        /// The computed shortest corpus length.
        length: usize,
    },
}

/// Result type alias using [`AttributionError`].
pub type AttributionResult<T> = Result<T, AttributionError>;
