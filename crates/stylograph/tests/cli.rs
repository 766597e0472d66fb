//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write three corpus files into a temp dir and return their paths.
///
/// The unknown sample shares most of its vocabulary with the "doyle"
/// corpus, so both decision tests should pick doyle.
fn fixture_corpora(tmp: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let doyle = tmp.path().join("doyle.txt");
    let wells = tmp.path().join("wells.txt");
    let unknown = tmp.path().join("unknown.txt");

    fs::write(
        &doyle,
        "The hound howled across the lonely moor. The detective watched \
         the hound from the shadow of the old stone house.",
    )
    .unwrap();
    fs::write(
        &wells,
        "The Martians advanced over the red weed. Their machines burned \
         every town between the coast and the silent capital.",
    )
    .unwrap();
    fs::write(
        &unknown,
        "The hound waited on the moor while the detective crossed the \
         shadow near the stone house.",
    )
    .unwrap();

    (doyle, wells, unknown)
}

fn corpus_args(doyle: &PathBuf, wells: &PathBuf, unknown: &PathBuf) -> Vec<String> {
    vec![
        format!("doyle={}", doyle.display()),
        format!("wells={}", wells.display()),
        "--unknown".to_string(),
        unknown.display().to_string(),
    ]
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Lengths Command
// =============================================================================

#[test]
fn lengths_reports_word_counts_and_minimum() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("lengths")
        .args(corpus_args(&doyle, &wells, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let counts = json["word_counts"].as_array().unwrap();
    assert_eq!(counts.len(), 3);
    let shortest = json["shortest_len"].as_u64().unwrap();
    let min = counts
        .iter()
        .map(|c| c["words"].as_u64().unwrap())
        .min()
        .unwrap();
    assert_eq!(shortest, min);
    assert!(shortest > 0);
}

// =============================================================================
// Attribute Command
// =============================================================================

#[test]
fn attribute_picks_matching_author_with_both_tests() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("attribute")
        .args(corpus_args(&doyle, &wells, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["chi_squared"]["most_likely"], "doyle");
    assert_eq!(json["jaccard"]["most_likely"], "doyle");
    assert!(json["word_length"].is_object());
    assert!(json["stopwords"].is_object());
    assert!(json["parts_of_speech"].is_object());
}

#[test]
fn attribute_text_output_names_verdicts() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    cmd()
        .arg("attribute")
        .args(corpus_args(&doyle, &wells, &unknown))
        .assert()
        .success()
        .stdout(predicate::str::contains("most likely author by vocabulary"))
        .stdout(predicate::str::contains("most likely author by similarity"))
        .stdout(predicate::str::contains("shortest corpus"));
}

#[test]
fn attribute_selective_tests_skip_others() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("attribute")
        .args(corpus_args(&doyle, &wells, &unknown))
        .args(["--tests", "jaccard", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["jaccard"].is_object());
    assert!(json["chi_squared"].is_null());
    assert!(json["word_length"].is_null());
}

// =============================================================================
// Single-Test Commands
// =============================================================================

#[test]
fn jaccard_scores_are_in_unit_interval() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("jaccard")
        .args(corpus_args(&doyle, &wells, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for score in json["scores"].as_array().unwrap() {
        let s = score["score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&s), "jaccard out of range: {s}");
    }
}

#[test]
fn chi_squared_scores_are_non_negative() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("chi-squared")
        .args(corpus_args(&doyle, &wells, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for score in json["scores"].as_array().unwrap() {
        assert!(score["score"].as_f64().unwrap() >= 0.0);
    }
}

#[test]
fn identical_corpus_wins_both_tests() {
    let tmp = TempDir::new().unwrap();
    let text = "A curious case of borrowed style and stolen words.";
    let twin = tmp.path().join("twin.txt");
    let other = tmp.path().join("other.txt");
    let unknown = tmp.path().join("unknown.txt");
    fs::write(&twin, text).unwrap();
    fs::write(&other, "Entirely unrelated vocabulary fills this different corpus today.").unwrap();
    fs::write(&unknown, text).unwrap();

    let output = cmd()
        .arg("attribute")
        .args(corpus_args(&twin, &other, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["chi_squared"]["most_likely"], "twin");
    assert_eq!(json["jaccard"]["most_likely"], "twin");
    assert_eq!(json["jaccard"]["scores"][0]["score"], 1.0);
}

// =============================================================================
// Distributions Command
// =============================================================================

#[test]
fn distributions_emits_three_reports() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);

    let output = cmd()
        .arg("distributions")
        .args(corpus_args(&doyle, &wells, &unknown))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["word_length"]["top_k"], 15);
    assert_eq!(json["stopwords"]["top_k"], 50);
    assert_eq!(json["parts_of_speech"]["top_k"], 35);
    assert_eq!(json["word_length"]["authors"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn missing_corpus_file_fails_with_context() {
    let tmp = TempDir::new().unwrap();
    let (_, wells, unknown) = fixture_corpora(&tmp);
    let missing = tmp.path().join("nope.txt");

    cmd()
        .arg("attribute")
        .args(corpus_args(&missing, &wells, &unknown))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_corpus_argument_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, _, unknown) = fixture_corpora(&tmp);

    cmd()
        .arg("attribute")
        .arg("no-separator-here")
        .args(["--unknown", unknown.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LABEL=PATH"));
}

#[test]
fn empty_corpus_fails_before_any_test() {
    let tmp = TempDir::new().unwrap();
    let (_, wells, unknown) = fixture_corpora(&tmp);
    let empty = tmp.path().join("empty.txt");
    fs::write(&empty, "12345 !!! 678").unwrap(); // no alphabetic tokens

    cmd()
        .arg("attribute")
        .args(corpus_args(&empty, &wells, &unknown))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no alphabetic word tokens"));
}

#[test]
fn oversized_input_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let (doyle, wells, unknown) = fixture_corpora(&tmp);
    fs::write(tmp.path().join(".stylograph.toml"), "max_input_bytes = 10\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .arg("attribute")
        .args(corpus_args(&doyle, &wells, &unknown))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}
