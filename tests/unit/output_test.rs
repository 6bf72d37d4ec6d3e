//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use dco::core::models::{RemediationPolicy, Violation};
use dco::output::{CheckReport, OutputMode, RemediationMessage};

use crate::common::fixtures::{SHA_A, SHA_B, url_for};

fn violation(sha: &str, message: &str) -> Violation {
    Violation {
        sha: sha.to_string(),
        url: url_for(sha),
        author: "bex".to_string(),
        email: "bex@disney.com".to_string(),
        committer: "Bex Warner".to_string(),
        message: message.to_string(),
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CheckReport Tests
// =============================================================================

#[test]
fn report_passes_without_violations() {
    let report = CheckReport::new(3, vec![], RemediationPolicy::disabled());
    assert!(report.passed);
    assert!(report.human().contains("All 3 commit(s) have a DCO sign-off"));
}

#[test]
fn report_without_commits() {
    let report = CheckReport::new(0, vec![], RemediationPolicy::disabled());
    assert_eq!(report.human(), "No commits to check.\n");
}

#[test]
fn report_lists_violations() {
    let report = CheckReport::new(
        2,
        vec![violation(SHA_A, "The sign-off is missing.")],
        RemediationPolicy::disabled(),
    );
    let text = report.human();
    assert!(!report.passed);
    assert!(text.contains("[18aebfa] bex <bex@disney.com>"));
    assert!(text.contains("The sign-off is missing."));
    assert!(text.contains(&url_for(SHA_A)));
    assert!(text.contains("git commit --amend --signoff"));
    assert!(!text.contains("dco remediate"));
}

#[test]
fn report_suggests_rebase_and_remediation() {
    let report = CheckReport::new(
        4,
        vec![
            violation(SHA_A, "The sign-off is missing."),
            violation(SHA_B, "The sign-off is missing."),
        ],
        RemediationPolicy::individual(),
    );
    let text = report.human();
    assert!(text.contains("FAILED: 2 commit(s)"));
    assert!(text.contains("git rebase HEAD~4 --signoff"));
    assert!(text.contains(&format!("dco remediate {SHA_A} {SHA_B}")));
}

#[test]
fn report_suggests_root_rebase_for_full_history() {
    let report = CheckReport::new(
        2,
        vec![
            violation(SHA_A, "The sign-off is missing."),
            violation(SHA_B, "The sign-off is missing."),
        ],
        RemediationPolicy::disabled(),
    )
    .with_root(true);
    let text = report.human();
    assert!(text.contains("git rebase --root --signoff"));
    assert!(!text.contains("HEAD~2"));
}

#[test]
fn report_skips_link_without_pr_url() {
    let mut unlinked = violation(SHA_A, "The sign-off is missing.");
    unlinked.url = String::new();
    let report = CheckReport::new(1, vec![unlinked], RemediationPolicy::disabled());
    let text = report.human();
    assert!(text.contains("The sign-off is missing."));
    assert!(!text.contains("/commits/"));
}

#[test]
fn report_serialization() {
    let report = CheckReport::new(
        1,
        vec![violation(SHA_A, "The sign-off is missing.")],
        RemediationPolicy::all(),
    );
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["commits_checked"], 1);
    assert_eq!(json["violations"][0]["sha"], SHA_A);
    assert_eq!(json["violations"][0]["committer"], "Bex Warner");
    assert!(json["evaluated_at"].is_string());
    assert!(json.get("remediation").is_none());
}

#[test]
fn violation_fields_keep_their_order() {
    let json = serde_json::to_string(&violation(SHA_A, "m")).unwrap();
    let positions: Vec<usize> = ["sha", "url", "author", "email", "committer", "message"]
        .iter()
        .map(|key| json.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// RemediationMessage Tests
// =============================================================================

#[test]
fn remediation_message_serialization() {
    let result = RemediationMessage {
        commits: vec![SHA_A.to_string()],
        message: "DCO Remediation Commit".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"commits\":[\"18aebfa67dde85da0f5099ad70ef647685a05205\"]"));
}
