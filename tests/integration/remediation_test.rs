//! Remediation workflow tests
//!
//! Forgotten sign-offs are fixed with a follow-up commit produced by
//! `dco remediate`, without rewriting history.

use predicates::prelude::*;
use std::fs;

use super::dco;
use crate::common::git_repo::TempGitRepo;

fn enable_remediation(repo: &TempGitRepo, third_party: bool) {
    repo.write_file(
        ".dco.toml",
        &format!("[allow_remediation_commits]\nindividual = true\nthird_party = {third_party}\n"),
    );
}

/// Full cycle: unsigned commit fails, remediation commit fixes it
#[test]
fn test_individual_remediation_cycle() {
    let repo = TempGitRepo::new();
    enable_remediation(&repo, false);
    let unsigned = repo.commit("forgot to sign off");

    dco().current_dir(repo.path()).arg("check").assert().code(1).stdout(
        predicate::str::contains(format!("dco remediate {unsigned}")),
    );

    let output = dco()
        .current_dir(repo.path())
        .args(["remediate", &unsigned])
        .output()
        .unwrap();
    assert!(output.status.success());
    let message = String::from_utf8(output.stdout).unwrap();
    assert!(message.contains(&format!(
        "I, Test User <test@example.com>, hereby add my Signed-off-by to this commit: {unsigned}"
    )));
    assert!(message.contains("Signed-off-by: Test User <test@example.com>"));

    repo.commit(&message);

    dco().current_dir(repo.path()).arg("check").assert().success();
}

#[test]
fn test_remediation_ignored_when_disabled() {
    let repo = TempGitRepo::new();
    let unsigned = repo.commit("forgot to sign off");
    let output = dco()
        .current_dir(repo.path())
        .args(["remediate", &unsigned])
        .output()
        .unwrap();
    repo.commit(&String::from_utf8(output.stdout).unwrap());

    dco()
        .current_dir(repo.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The sign-off is missing."));
}

#[test]
fn test_third_party_remediation_cycle() {
    let repo = TempGitRepo::new();
    enable_remediation(&repo, true);
    let unsigned = repo.commit_as("contractor work", "Jane Doe", "jane@example.com");

    let output = dco()
        .current_dir(repo.path())
        .args(["remediate", &unsigned, "--on-behalf-of", "Jane Doe <jane@example.com>"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let message = String::from_utf8(output.stdout).unwrap();
    assert!(message.starts_with("DCO Remediation Commit for Jane Doe <jane@example.com>"));
    repo.commit(&message);

    dco().current_dir(repo.path()).arg("check").assert().success();
}

#[test]
fn test_remediate_with_explicit_signer_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dco()
        .current_dir(dir.path())
        .args(["--json", "remediate", "abc1234", "--signer", "bex <bex@disney.com>"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["commits"][0], "abc1234");
    let message = result["message"].as_str().unwrap();
    assert!(message.contains(
        "I, bex <bex@disney.com>, hereby add my Signed-off-by to this commit: abc1234"
    ));
}

#[test]
fn test_remediate_rejects_malformed_signer() {
    dco()
        .args(["remediate", "abc1234", "--signer", "bex@disney.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected \"Name <email>\""));
}

#[test]
fn test_remediate_requires_a_sha() {
    dco().arg("remediate").assert().failure();
}

#[test]
fn test_config_file_is_found_from_subdirectory() {
    let repo = TempGitRepo::new();
    enable_remediation(&repo, false);
    let unsigned = repo.commit("forgot to sign off");
    let output = dco()
        .current_dir(repo.path())
        .args(["remediate", &unsigned])
        .output()
        .unwrap();
    repo.commit(&String::from_utf8(output.stdout).unwrap());

    let nested = repo.path().join("docs/guide");
    fs::create_dir_all(&nested).unwrap();
    dco().current_dir(&nested).arg("check").assert().success();
}
