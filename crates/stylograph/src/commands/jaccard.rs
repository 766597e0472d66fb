//! Jaccard command — lexical similarity test.

use clap::Args;
use tracing::{debug, instrument};

use stylograph_core::attribution::jaccard::jaccard_scores;
use stylograph_core::config::Config;

use super::attribute::print_jaccard;
use super::{CorpusArgs, load_corpus_set};

/// Arguments for the `jaccard` subcommand.
#[derive(Args, Debug)]
pub struct JaccardArgs {
    /// Corpus inputs.
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Score truncated-vocabulary overlap for each known author.
#[instrument(name = "cmd_jaccard", skip_all, fields(unknown = %args.corpus.unknown))]
pub fn cmd_jaccard(
    args: JaccardArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing jaccard command");

    let set = load_corpus_set(&args.corpus, &config.unknown_label, max_input_bytes)?;
    let shortest_len = set.shortest_corpus()?.shortest_len;

    let report = jaccard_scores(&set, shortest_len);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_jaccard(&report);
    }

    Ok(())
}
