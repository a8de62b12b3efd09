//! Argument-level smoke tests for the query binaries. Nothing here needs
//! kernels or network access.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn spicequery_help_lists_the_subcommands() {
    let mut cmd = Command::cargo_bin("spicequery").expect("spicequery bin");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("state"))
        .stdout(predicate::str::contains("position"))
        .stdout(predicate::str::contains("time"))
        .stdout(predicate::str::contains("kernels"));
}

#[test]
fn spicequery_state_help_documents_the_correction_flag() {
    let mut cmd = Command::cargo_bin("spicequery").expect("spicequery bin");
    cmd.args(["state", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--correction"))
        .stdout(predicate::str::contains("LT+S"));
}

#[test]
fn spicequery_rejects_an_unknown_correction() {
    let mut cmd = Command::cargo_bin("spicequery").expect("spicequery bin");
    cmd.args([
        "state",
        "MARS BARYCENTER",
        "EARTH",
        "2030-01-01",
        "--correction",
        "SIDEWAYS",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown aberration correction"));
}

#[test]
fn fetch_kernels_help_mentions_the_manifest() {
    let mut cmd = Command::cargo_bin("fetch_kernels").expect("fetch_kernels bin");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest"));
}
