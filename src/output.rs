//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{RemediationPolicy, Violation};
use crate::status::CommitStatus;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a sign-off check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every commit passed
    pub passed: bool,
    /// Number of commits evaluated (including skipped ones)
    pub commits_checked: usize,
    /// Violations in commit order
    pub violations: Vec<Violation>,
    /// When the evaluation finished
    pub evaluated_at: DateTime<Utc>,
    /// Remediation kinds the repository accepts, used for hints
    #[serde(skip)]
    pub remediation: RemediationPolicy,
    /// Whether the checked commits start at the root of the history
    #[serde(skip)]
    pub reaches_root: bool,
}

impl CheckReport {
    /// Build a report for `commits_checked` commits and their violations
    #[must_use]
    pub fn new(
        commits_checked: usize,
        violations: Vec<Violation>,
        remediation: RemediationPolicy,
    ) -> Self {
        Self {
            passed: violations.is_empty(),
            commits_checked,
            violations,
            evaluated_at: Utc::now(),
            remediation,
            reaches_root: false,
        }
    }

    /// Mark whether the checked commits include the root commit
    #[must_use]
    pub const fn with_root(mut self, reaches_root: bool) -> Self {
        self.reaches_root = reaches_root;
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human(&self) -> String {
        let mut out = String::new();

        if self.commits_checked == 0 {
            out.push_str("No commits to check.\n");
            return out;
        }
        if self.passed {
            let _ = writeln!(
                out,
                "All {} commit(s) have a DCO sign-off from the author.",
                self.commits_checked
            );
            return out;
        }

        let _ = writeln!(out, "Checked {} commit(s)...\n", self.commits_checked);
        for v in &self.violations {
            let short = v.sha.get(..7).unwrap_or(&v.sha);
            let _ = writeln!(out, "  [{short}] {} <{}>", v.author, v.email);
            let _ = writeln!(out, "          {}", v.message);
            if !v.url.is_empty() {
                let _ = writeln!(out, "          {}", v.url);
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "FAILED: {} commit(s) without a valid sign-off\n",
            self.violations.len()
        );
        out.push_str(&self.hints());
        out
    }

    fn hints(&self) -> String {
        let mut out = String::new();
        let count = self.violations.len();

        if count == 1 {
            out.push_str("To fix, amend the commit with a sign-off:\n");
            out.push_str("  git commit --amend --signoff\n");
        } else {
            out.push_str("To fix, sign off the commits while rebasing:\n");
            if self.reaches_root {
                out.push_str("  git rebase --root --signoff\n");
            } else {
                let _ = writeln!(out, "  git rebase HEAD~{} --signoff", self.commits_checked);
            }
        }
        out.push_str("  git push --force-with-lease\n");

        if self.remediation.scans_claims() {
            let shas: Vec<&str> = self.violations.iter().map(|v| v.sha.as_str()).collect();
            out.push_str("\nOr add a remediation commit instead of rewriting history:\n");
            let _ = writeln!(out, "  dco remediate {}", shas.join(" "));
        }
        out
    }
}

/// Render a commit status
pub fn render_status(status: &CommitStatus, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            println!("{}: {}", status.context, status.description);
            if let Some(url) = &status.target_url {
                println!("Details: {url}");
            }
        },
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(status).unwrap_or_default());
        },
    }
}

/// Result of `dco remediate`
#[derive(Debug, Serialize)]
pub struct RemediationMessage {
    /// Commits the message covers
    pub commits: Vec<String>,
    /// Full commit message to use for the remediation commit
    pub message: String,
}

impl RemediationMessage {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
