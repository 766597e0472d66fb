//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use stylograph_core::CorpusSet;
use stylograph_core::annotate::WordTokenizer;

pub mod attribute;
pub mod chisquared;
pub mod distributions;
pub mod info;
pub mod jaccard;
pub mod lengths;

/// Corpus inputs shared by every attribution subcommand.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Known-author corpora as LABEL=PATH pairs.
    #[arg(required = true, value_name = "LABEL=PATH")]
    pub corpora: Vec<String>,

    /// Text file of unknown authorship.
    #[arg(short, long, value_name = "PATH")]
    pub unknown: Utf8PathBuf,
}

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every attribution
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Split a `LABEL=PATH` corpus argument.
fn parse_corpus_arg(arg: &str) -> anyhow::Result<(&str, &Utf8Path)> {
    let (label, path) = arg
        .split_once('=')
        .with_context(|| format!("invalid corpus argument '{arg}': expected LABEL=PATH"))?;
    if label.is_empty() {
        anyhow::bail!("invalid corpus argument '{arg}': empty label");
    }
    Ok((label, Utf8Path::new(path)))
}

/// Read every corpus file and build the normalized, validated corpus set.
pub fn load_corpus_set(
    args: &CorpusArgs,
    unknown_label: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<CorpusSet> {
    let mut builder = CorpusSet::builder(unknown_label);

    for arg in &args.corpora {
        let (label, path) = parse_corpus_arg(arg)?;
        let text = read_input_file(path, max_bytes)?;
        builder = builder.add_text(label, &text, &WordTokenizer);
    }

    let unknown_text = read_input_file(&args.unknown, max_bytes)?;
    builder = builder.unknown_text(&unknown_text, &WordTokenizer);

    builder.build().context("failed to build corpus set")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_corpus_arg() {
        let (label, path) = parse_corpus_arg("doyle=texts/hound.txt").unwrap();
        assert_eq!(label, "doyle");
        assert_eq!(path, Utf8Path::new("texts/hound.txt"));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(parse_corpus_arg("doyle").is_err());
    }

    #[test]
    fn parse_rejects_empty_label() {
        assert!(parse_corpus_arg("=texts/hound.txt").is_err());
    }
}
