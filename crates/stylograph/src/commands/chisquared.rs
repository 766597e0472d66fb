//! Chi-squared command — vocabulary divergence test.

use clap::Args;
use tracing::{debug, instrument};

use stylograph_core::attribution::chi_squared::chi_squared_scores;
use stylograph_core::config::Config;

use super::attribute::print_chi_squared;
use super::{CorpusArgs, load_corpus_set};

/// Arguments for the `chi-squared` subcommand.
#[derive(Args, Debug)]
pub struct ChiSquaredArgs {
    /// Corpus inputs.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of most frequent combined words to score.
    #[arg(long)]
    pub vocab_size: Option<usize>,
}

/// Score vocabulary divergence for each known author.
#[instrument(name = "cmd_chi_squared", skip_all, fields(unknown = %args.corpus.unknown))]
pub fn cmd_chi_squared(
    args: ChiSquaredArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(vocab_size = ?args.vocab_size, "executing chi-squared command");

    let set = load_corpus_set(&args.corpus, &config.unknown_label, max_input_bytes)?;
    let vocab_size = args.vocab_size.unwrap_or(config.vocab_size);

    let report = chi_squared_scores(&set, vocab_size);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_chi_squared(&report);
    }

    Ok(())
}
