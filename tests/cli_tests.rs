//! CLI integration tests.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const MATCHES: &str = "\
Arsenal vs Chelsea [1.85 | 3.40 | 4.20]
Inter - Milan 2.10 3.20 3.50

Porto v Benfica
";

fn slipgen() -> Command {
    cargo_bin_cmd!("slipgen")
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_help_lists_commands() {
    slipgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("suggest"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_suggest_reads_stdin() {
    slipgen()
        .arg("suggest")
        .write_stdin(MATCHES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches:").and(predicate::str::contains("3")))
        .stdout(predicate::str::contains("27"));
}

#[test]
fn test_generate_json_is_seeded_and_valued() {
    let matches = temp_file(MATCHES);
    let run = || {
        let output = slipgen()
            .args(["generate", "--format", "json", "--seed", "42", "--stake", "1000", "-n", "5"])
            .arg("--matches")
            .arg(matches.path())
            .output()
            .expect("run slipgen");
        assert!(output.status.success(), "{output:?}");
        serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("json output")
    };

    let first = run();
    let second = run();

    assert_eq!(first["count"], 5);
    assert_eq!(first["matches"], 3);
    let slips = first["slips"].as_array().unwrap();
    assert_eq!(slips.len(), 5);
    for slip in slips {
        assert_eq!(slip["outcomes"].as_array().unwrap().len(), 3);
        assert_eq!(slip["outcomes"][0]["home_team"], "Arsenal");
        assert_eq!(slip["outcomes"][2]["away_team"], "Benfica");
        assert_eq!(slip["bonus_percent"], 3);
        assert!(slip.get("payout").is_some());
    }

    let codes = |doc: &serde_json::Value| -> Vec<serde_json::Value> {
        doc["slips"]
            .as_array()
            .unwrap()
            .iter()
            .map(|slip| slip["outcomes"].clone())
            .collect()
    };
    assert_eq!(codes(&first), codes(&second));
}

#[test]
fn test_generate_table_output() {
    slipgen()
        .args(["generate", "--quiet", "--seed", "1", "-n", "3", "--stake", "100"])
        .write_stdin(MATCHES)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated slips"))
        .stdout(predicate::str::contains("Arsenal vs Chelsea"))
        .stdout(predicate::str::contains("SLIP-"));
}

#[test]
fn test_generate_correct_score_coverage() {
    let output = slipgen()
        .args(["generate", "--market", "correct_score", "--max-goals", "1", "--format", "json"])
        .write_stdin("Porto v Benfica\n")
        .output()
        .expect("run slipgen");

    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["count"], 3);
    assert_eq!(doc["slips"][1]["outcomes"][0]["outcome"], "0-1");
    assert!(doc["slips"][0]["id"].as_str().unwrap().starts_with("CS-"));
}

#[test]
fn test_generate_rejects_oversized_coverage() {
    slipgen()
        .args(["generate", "--market", "correct_score", "--max-goals", "1000"])
        .write_stdin("Porto v Benfica\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sampling.max_goals"));
}

#[test]
fn test_generate_rejects_coverage_over_batch_cap() {
    slipgen()
        .args(["generate", "--market", "correct_score", "--max-goals", "300", "--quiet"])
        .write_stdin(MATCHES)
        .assert()
        .failure()
        .stderr(predicate::str::contains("136353 slips"));
}

#[test]
fn test_check_config_rejects_unbounded_max_goals() {
    let config = temp_file("[sampling]\nmarket = \"correct_score\"\nmax_goals = 4294967295\n");

    slipgen()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("sampling.max_goals"));
}

#[test]
fn test_generate_rejects_zero_max_consecutive() {
    slipgen()
        .args(["generate", "--max-consecutive", "0", "-n", "1"])
        .write_stdin(MATCHES)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max consecutive"));
}

#[test]
fn test_empty_input_warns() {
    slipgen()
        .args(["generate", "--quiet"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No matches found"));
}

#[test]
fn test_sample_output_is_a_match_list() {
    let output = slipgen()
        .args(["sample", "-n", "4", "--region", "epl", "--seed", "3"])
        .output()
        .expect("run slipgen");
    assert!(output.status.success());
    let list = String::from_utf8(output.stdout).unwrap();
    assert_eq!(list.lines().count(), 4);
    assert!(list.lines().all(|line| line.contains(" vs ")));

    slipgen()
        .args(["suggest"])
        .write_stdin(list)
        .assert()
        .success()
        .stdout(predicate::str::contains("81"));
}

#[test]
fn test_sample_rejects_unknown_region() {
    slipgen()
        .args(["sample", "--region", "moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn test_check_config_valid() {
    let config = temp_file("[sampling]\nmarket = \"goals\"\n\n[payout]\nstake = 500\n");

    slipgen()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("goals"));
}

#[test]
fn test_check_config_invalid() {
    let config = temp_file("[payout]\ntax_rate = 2\n");

    slipgen()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("payout"));
}
