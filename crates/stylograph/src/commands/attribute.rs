//! Attribute command — the full five-test attribution run.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use stylograph_core::annotate::RuleTagger;
use stylograph_core::attribution::reports::{
    ChiSquaredReport, CorpusSummary, DistributionReport, JaccardReport,
};
use stylograph_core::attribution::{RunOptions, run_attribution};
use stylograph_core::config::Config;

use super::{CorpusArgs, load_corpus_set};

/// Arguments for the `attribute` subcommand.
#[derive(Args, Debug)]
pub struct AttributeArgs {
    /// Corpus inputs.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Tests to run (comma-separated). Omit for all tests.
    #[arg(long, value_delimiter = ',')]
    pub tests: Option<Vec<String>>,
}

/// Run every attribution test and report both verdicts.
#[instrument(name = "cmd_attribute", skip_all, fields(unknown = %args.corpus.unknown))]
pub fn cmd_attribute(
    args: AttributeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(tests = ?args.tests, "executing attribute command");

    let set = load_corpus_set(&args.corpus, &config.unknown_label, max_input_bytes)?;
    let options = RunOptions {
        vocab_size: config.vocab_size,
        word_length_top: config.word_length_top,
        stopword_top: config.stopword_top,
        pos_top: config.pos_top,
    };

    let report = run_attribution(&set, &RuleTagger, args.tests.as_deref(), &options)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report.summary);

    for dist in [
        report.word_length.as_ref(),
        report.stopwords.as_ref(),
        report.parts_of_speech.as_ref(),
    ]
    .into_iter()
    .flatten()
    {
        print_distribution(dist);
    }

    if let Some(ref chi) = report.chi_squared {
        print_chi_squared(chi);
    }
    if let Some(ref jac) = report.jaccard {
        print_jaccard(jac);
    }

    Ok(())
}

/// Print per-corpus word counts and the truncation length.
pub fn print_summary(summary: &CorpusSummary) {
    println!("{}", "Corpora".bold());
    for count in &summary.word_counts {
        println!("  {}: {} words", count.author, count.words);
    }
    println!(
        "  {} {}",
        "shortest corpus:".dimmed(),
        summary.shortest_len
    );
}

/// Print one descriptive distribution test as per-author top-K lines.
pub fn print_distribution(report: &DistributionReport) {
    println!("\n{} (top {})", report.label.bold(), report.top_k);
    for author in &report.authors {
        let entries: Vec<String> = author
            .entries
            .iter()
            .map(|e| format!("{}:{}", e.category, e.count))
            .collect();
        println!(
            "  {} ({} tokens) {}",
            author.author.cyan(),
            author.total,
            entries.join(" "),
        );
    }
}

/// Print chi-squared scores and the argmin verdict.
pub fn print_chi_squared(report: &ChiSquaredReport) {
    println!("\n{}", "Chi-Squared Vocabulary Divergence".bold());
    for score in &report.scores {
        println!("  {} = {:.1}", score.author, score.score);
    }
    println!(
        "  {} {}",
        "most likely author by vocabulary:".dimmed(),
        report.most_likely.green(),
    );
}

/// Print Jaccard scores and the argmax verdict.
pub fn print_jaccard(report: &JaccardReport) {
    println!("\n{}", "Jaccard Lexical Similarity".bold());
    for score in &report.scores {
        println!("  {} = {:.4}", score.author, score.score);
    }
    println!(
        "  {} {}",
        "most likely author by similarity:".dimmed(),
        report.most_likely.green(),
    );
}
