//! Core library for stylograph.
//!
//! Statistical authorship attribution: given labeled corpora from known
//! authors and one unknown sample, estimate which author most likely wrote
//! the sample using independent stylometric signals.
//!
//! # Modules
//!
//! - [`annotate`] - Tokenizer and POS tagger seams with rule-based defaults
//! - [`attribution`] - The five attribution tests and their reports
//! - [`config`] - Configuration loading and management
//! - [`corpus`] - Corpus normalization and length equalization
//! - [`error`] - Error types and result aliases
//! - [`freq`] - Deterministic frequency distributions
//! - [`word_lists`] - The default English function-word set
//!
//! # Quick Start
//!
//! ```
//! use stylograph_core::annotate::{RuleTagger, WordTokenizer};
//! use stylograph_core::attribution::{RunOptions, run_attribution};
//! use stylograph_core::corpus::CorpusSet;
//!
//! let set = CorpusSet::builder("unknown")
//!     .add_text("doyle", "The hound howled on the lonely moor.", &WordTokenizer)
//!     .add_text("wells", "The Martians advanced across the red weed.", &WordTokenizer)
//!     .unknown_text("The hound waited on the moor.", &WordTokenizer)
//!     .build()
//!     .expect("valid corpora");
//!
//! let report = run_attribution(&set, &RuleTagger, None, &RunOptions::default())
//!     .expect("attribution run");
//! println!("{}", report.jaccard.unwrap().most_likely);
//! ```
#![deny(unsafe_code)]

pub mod annotate;

pub mod attribution;

pub mod config;

pub mod corpus;

pub mod error;

pub mod freq;

pub mod word_lists;

pub use attribution::{AttributionReport, RunOptions, run_attribution};

pub use config::{Config, ConfigLoader, LogLevel};

pub use corpus::CorpusSet;

pub use error::{AttributionError, AttributionResult, ConfigError, ConfigResult};

/// Default cap on corpus file size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
