use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn setup(dict_words: &str, text: &str) -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let dict = dir.path().join("words.txt");
    let personal = dir.path().join("personal.txt");
    let file = dir.path().join("input.txt");
    fs::write(&dict, dict_words).unwrap();
    fs::write(&file, text).unwrap();
    (dir, dict, personal, file)
}

fn spellcore() -> Command {
    Command::cargo_bin("spellcore").unwrap()
}

#[test]
fn reports_misspelled_word_and_fails() {
    let (_dir, dict, personal, file) = setup("work\nlog\n", "wrk log\n");

    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains("wrk"))
        .stdout(predicate::str::contains("1 error"));
}

#[test]
fn clean_file_succeeds() {
    let (_dir, dict, personal, file) = setup("work\nlog\n", "work log\n");

    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn no_fail_keeps_exit_code_zero() {
    let (_dir, dict, personal, file) = setup("work\n", "wrk\n");

    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .arg("--no-fail")
        .assert()
        .success();
}

#[test]
fn json_output_is_parseable() {
    let (_dir, dict, personal, file) = setup("work\n", "wrk\n");

    let assert = spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("-o")
        .arg("json")
        .arg("--no-fail")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_errors"], 1);
    assert_eq!(value["errors"][0]["word"], "wrk");
    assert_eq!(value["errors"][0]["line"], 1);
}

#[test]
fn suggest_subcommand_ranks_candidates() {
    let (_dir, dict, personal, _file) = setup("hello\nhelp\nheld\n", "");

    spellcore()
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .arg("suggest")
        .arg("helo")
        .assert()
        .success()
        .stdout(predicate::str::diff("hello\nhelp\nheld\n"));
}

#[test]
fn add_to_dict_persists_word() {
    let (_dir, dict, personal, file) = setup("work\n", "frobnicate work\n");

    spellcore()
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--add-to-dict")
        .arg("frobnicate")
        .assert()
        .success();

    let saved = fs::read_to_string(&personal).unwrap();
    assert!(saved.contains("frobnicate"));

    // The persisted word is no longer reported.
    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .assert()
        .success();
}

#[test]
fn missing_dictionary_is_a_clear_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("input.txt");
    fs::write(&file, "anything\n").unwrap();

    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(dir.path().join("missing.txt"))
        .arg("--personal-dict")
        .arg(dir.path().join("personal.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usable main dictionary"));
}

#[test]
fn all_caps_tokens_are_skipped_by_default() {
    let (_dir, dict, personal, file) = setup("work\n", "TODO work\n");

    spellcore()
        .arg(&file)
        .arg("--dictionary")
        .arg(&dict)
        .arg("--personal-dict")
        .arg(&personal)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}
