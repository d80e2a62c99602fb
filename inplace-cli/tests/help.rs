use assert_cmd::cargo::{self};
use predicates::str::contains;
use std::fs;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("inplace");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("inplace"))
        .stdout(contains("--field"));
}

#[test]
fn missing_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("inplace");
    cmd.arg(dir.path().join("absent.json"))
        .arg("--log-file")
        .arg(dir.path().join("inplace.log"))
        .assert()
        .failure()
        .stderr(contains("absent.json"));
}

#[test]
fn unknown_field_is_reported_before_the_ui_starts() {
    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("campaign.json");
    fs::write(&document, r#"{"title": "Spring canvass", "seats": 4}"#).unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("inplace");
    cmd.arg(&document)
        .args(["-f", "/subtitle", "-f", "/seats", "-f", "title"])
        .arg("--log-file")
        .arg(dir.path().join("inplace.log"))
        .assert()
        .failure()
        .stderr(contains("no string value at '/subtitle'"))
        .stderr(contains("no string value at '/seats'"))
        .stderr(contains("must be a JSON pointer"));
}
