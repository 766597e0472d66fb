//! Distributions command — the three descriptive tests.

use clap::Args;
use tracing::{debug, instrument};

use serde::Serialize;
use stylograph_core::annotate::RuleTagger;
use stylograph_core::attribution::distributions::{
    pos_distributions, stopword_distributions, word_length_distributions,
};
use stylograph_core::attribution::reports::DistributionReport;
use stylograph_core::config::Config;
use stylograph_core::word_lists::STOP_WORDS;

use super::attribute::{print_distribution, print_summary};
use super::{CorpusArgs, load_corpus_set};

/// Arguments for the `distributions` subcommand.
#[derive(Args, Debug)]
pub struct DistributionsArgs {
    /// Corpus inputs.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Override the top-K cutoff for every distribution.
    #[arg(long)]
    pub top: Option<usize>,
}

/// JSON envelope for the three distribution reports.
#[derive(Serialize)]
struct DistributionsOutput {
    word_length: DistributionReport,
    stopwords: DistributionReport,
    parts_of_speech: DistributionReport,
}

/// Compute and print the three descriptive frequency distributions.
#[instrument(name = "cmd_distributions", skip_all, fields(unknown = %args.corpus.unknown))]
pub fn cmd_distributions(
    args: DistributionsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = ?args.top, "executing distributions command");

    let set = load_corpus_set(&args.corpus, &config.unknown_label, max_input_bytes)?;
    let summary = set.shortest_corpus()?;
    let shortest_len = summary.shortest_len;

    let word_length = word_length_distributions(
        &set,
        shortest_len,
        args.top.unwrap_or(config.word_length_top),
    );
    let stopwords = stopword_distributions(
        &set,
        shortest_len,
        &STOP_WORDS,
        args.top.unwrap_or(config.stopword_top),
    );
    let parts_of_speech = pos_distributions(
        &set,
        shortest_len,
        &RuleTagger,
        args.top.unwrap_or(config.pos_top),
    );

    if global_json {
        let output = DistributionsOutput {
            word_length,
            stopwords,
            parts_of_speech,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&summary);
    print_distribution(&word_length);
    print_distribution(&stopwords);
    print_distribution(&parts_of_speech);

    Ok(())
}
