// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const PNG_MAGIC: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

#[test]
fn test_render_default_card() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("card.png");

    let mut cmd = Command::cargo_bin("msgcard").unwrap();
    cmd.arg("--output-png-file").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let data = fs::read(&out).unwrap();
    assert_eq!(&data[..8], PNG_MAGIC);
}

#[test]
fn test_render_card_from_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("card.json");
    let out = dir.path().join("card.png");

    fs::write(
        &input,
        r##"{
            "title": "Thanks Card",
            "to": "John",
            "message": "Hello there",
            "date": "12/25",
            "from": "Jane",
            "backgroundColor": "#FFFACD"
        }"##,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("msgcard").unwrap();
    cmd.arg("-i").arg(&input).arg("-o").arg(&out);
    cmd.assert().success();

    let data = fs::read(&out).unwrap();
    assert_eq!(&data[..8], PNG_MAGIC);
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("msgcard").unwrap();
    cmd.arg("-i").arg("no-such-card.json");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, "{not json").unwrap();

    let mut cmd = Command::cargo_bin("msgcard").unwrap();
    cmd.arg("-i").arg(&input);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse input file"));
}
