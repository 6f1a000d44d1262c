//! Integration tests for CLI surface

mod common;

use common::TestHome;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let home = TestHome::new();

    home.camp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let home = TestHome::new();

    home.camp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("camp"));
}

#[test]
fn test_completions_bash() {
    let home = TestHome::new();

    home.camp()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camp"));
}

#[test]
fn test_completions_unknown_shell() {
    let home = TestHome::new();

    home.camp()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_unknown_command_fails() {
    let home = TestHome::new();

    home.camp().arg("explode").assert().failure();
}

#[test]
fn test_config_from_env() {
    let home = TestHome::new();
    let config = home.write_config(
        r#"
flakes:
  - name: cfg
    url: "github:al/cfg"
    outputs: [{name: out, type: home}]
"#,
    );

    home.camp()
        .env("CAMP_CONFIG", &config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 flakes"));
}
