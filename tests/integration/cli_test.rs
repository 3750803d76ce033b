//! CLI surface tests: help, version, completions, config.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::run_cclight;

#[test]
fn help_exits_0_and_lists_subcommands() {
    Command::cargo_bin("cclight")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("highlight"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_crate_version() {
    Command::cargo_bin("cclight")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    let (_stdout, stderr, exit_code) = run_cclight(&["frobnicate"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unrecognized subcommand") || stderr.contains("error"));
}

#[test]
fn completions_bash_mentions_binary_name() {
    let (stdout, _stderr, exit_code) = run_cclight(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("cclight"));
}

#[test]
fn config_path_points_at_config_toml() {
    let (stdout, _stderr, exit_code) = run_cclight(&["config", "path"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains("cclight"));
}

#[test]
fn config_show_emits_toml_with_defaults() {
    let (stdout, _stderr, exit_code) = run_cclight(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("theme ="));
    assert!(stdout.contains("parser_cmd ="));
}

#[test]
fn empty_parser_cmd_is_rejected() {
    let (_stdout, stderr, exit_code) = run_cclight(&["--parser-cmd", "", "verify"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("parser command is empty"));
}
