use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn corpus() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("corpus"));
    cmd.env_remove("CORPUS_FORMAT").arg("--no-color");
    cmd
}

#[test]
fn ngrams_end_to_end() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("fox.txt"), "The quick brown fox");
    write_file(&temp.path().join("dog.txt"), "The quick brown dog");

    let assert = corpus()
        .args(["--format", "jsonl", "ngrams", "--min-words", "2"])
        .arg(temp.path().join("fox.txt"))
        .arg(temp.path().join("dog.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Setting max words to 4"));

    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["n"], 3);
    assert_eq!(items[0]["text_length"], 15);
    assert_eq!(items[0]["sentence"], "the quick brown");
}

#[test]
fn ngrams_punctuation_is_reattached() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "It was the end. The rest is silence.");
    write_file(&temp.path().join("b.txt"), "So it was the end. The story goes on.");

    let assert = corpus()
        .args(["--format", "jsonl", "ngrams", "--min-words", "4"])
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success();

    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["n"], 5);
    assert_eq!(items[0]["sentence"], "it was the end. the");
}

#[test]
fn ngrams_rejects_inverted_bounds() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "one two three");
    write_file(&temp.path().join("b.txt"), "one two three");

    corpus()
        .args(["ngrams", "--min-words", "5", "--max-words", "3"])
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Max words (3) must be equal to or larger than min words (5)",
        ));
}

#[test]
fn ngrams_rejects_zero_min_words() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "one two three");
    write_file(&temp.path().join("b.txt"), "one two three");

    corpus()
        .args(["ngrams", "--min-words", "0"])
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Min words must be at least 1"));
}

#[test]
fn ngrams_no_matches_exits_cleanly() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "alpha beta gamma delta epsilon");
    write_file(&temp.path().join("b.txt"), "zeta eta theta iota kappa");

    corpus()
        .args(["ngrams", "--min-words", "2"])
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success()
        .stdout("n  text length  full sentence\n-  -----------  -------------\n")
        .stderr(predicate::str::contains("Found 0 matches"));
}

#[test]
fn common_requires_two_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "whale");

    corpus()
        .arg("common")
        .arg(temp.path().join("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 text files"));
}

#[test]
fn common_reports_missing_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "whale");

    corpus()
        .arg("common")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn common_rejects_malformed_frequency_list() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "the whale");
    write_file(&temp.path().join("b.txt"), "a whale");
    write_file(&temp.path().join("freq.txt"), "whale;0.1\nsea 0.2\n");

    corpus()
        .arg("common")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .arg("--word-frequency-list")
        .arg(temp.path().join("freq.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("freq.txt:2:"));
}

#[test]
fn common_table_output() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "The whale, the whale!");
    write_file(&temp.path().join("b.txt"), "A whale and a sea.");

    corpus()
        .arg("common")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success()
        .stdout(
            "word   frequency %  occurrences  length\n\
             -----  -----------  -----------  ------\n\
             whale     33.33333            3       5\n",
        );
}

#[test]
fn common_min_occurrences_and_custom_stopwords() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "The whale, the whale!");
    write_file(&temp.path().join("b.txt"), "A whale and the sea.");
    write_file(&temp.path().join("stop.txt"), "# nothing but whales\nwhale\n");

    let assert = corpus()
        .args(["--format", "jsonl", "common", "--occurrences", "min"])
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .arg("--stopword-list")
        .arg(temp.path().join("stop.txt"))
        .assert()
        .success();

    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["word"], "the");
    assert_eq!(items[0]["occurrences"], 1);
}

#[test]
fn classes_markdown_output() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "Whales were swimming quickly.");

    corpus()
        .args(["--format", "md", "classes", "--sort", "alpha"])
        .arg(temp.path().join("a.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "| word | occurrences | length | tag | word class |\n\
             | :--- | ---: | ---: | :--- | :--- |\n\
             | quickly | 1 | 7 | RB | Adverb |\n",
        ));
}

#[test]
fn format_from_environment() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "whale");

    let assert = corpus()
        .env("CORPUS_FORMAT", "json")
        .arg("classes")
        .arg(temp.path().join("a.txt"))
        .assert()
        .success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn quiet_suppresses_status_lines() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "whale");

    corpus()
        .args(["-q", "classes"])
        .arg(temp.path().join("a.txt"))
        .assert()
        .success()
        .stderr("");
}
