//! Lengths command — corpus size diagnostics.

use clap::Args;
use tracing::{debug, instrument};

use stylograph_core::config::Config;

use super::attribute::print_summary;
use super::{CorpusArgs, load_corpus_set};

/// Arguments for the `lengths` subcommand.
#[derive(Args, Debug)]
pub struct LengthsArgs {
    /// Corpus inputs.
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Print per-author word counts and the shared truncation length.
#[instrument(name = "cmd_lengths", skip_all, fields(unknown = %args.corpus.unknown))]
pub fn cmd_lengths(
    args: LengthsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing lengths command");

    let set = load_corpus_set(&args.corpus, &config.unknown_label, max_input_bytes)?;
    let summary = set.shortest_corpus()?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}
