//! Commit list from a JSON export
//!
//! Accepts the array returned by a hosting platform's pull request commits /
//! compare endpoint:
//!
//! ```json
//! [{
//!   "sha": "...",
//!   "commit": {
//!     "message": "...",
//!     "author": { "name": "...", "email": "..." },
//!     "committer": { "name": "...", "email": "..." },
//!     "verification": { "verified": false }
//!   },
//!   "author": { "login": "...", "type": "User" },
//!   "parents": [{ "sha": "..." }]
//! }]
//! ```
//!
//! Unknown fields are ignored and every nested object may be `null`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::core::models::{Commit, Identity};
use crate::core::ports::CommitSource;

/// Commits read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonCommitSource {
    path: PathBuf,
}

impl JsonCommitSource {
    /// Create a source reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitSource for JsonCommitSource {
    fn load_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let commits = parse_commits(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!("loaded {} commit(s) from {}", commits.len(), self.describe());
        Ok(commits)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Convert a platform commit list into evaluator commits
pub fn parse_commits(json: &str) -> serde_json::Result<Vec<Commit>> {
    let raw: Vec<RawCommit> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Commit::from).collect())
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: String,
    commit: RawGitCommit,
    #[serde(default)]
    author: Option<RawAccount>,
    #[serde(default)]
    parents: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawGitCommit {
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: Option<RawSignature>,
    #[serde(default)]
    committer: Option<RawSignature>,
    #[serde(default)]
    verification: Option<RawVerification>,
}

#[derive(Debug, Deserialize)]
struct RawSignature {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    login: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVerification {
    #[serde(default)]
    verified: bool,
}

impl From<RawCommit> for Commit {
    fn from(raw: RawCommit) -> Self {
        let author_is_bot = raw.author.as_ref().and_then(|a| a.kind.as_deref()) == Some("Bot");
        Self {
            sha: raw.sha,
            message: raw.commit.message,
            author: raw.commit.author.map(|s| Identity::new(s.name, s.email)),
            committer: raw.commit.committer.map(|s| Identity::new(s.name, s.email)),
            author_login: raw.author.map(|a| a.login),
            author_is_bot,
            parent_count: raw.parents.len(),
            is_verified: raw.commit.verification.map(|v| v.verified),
        }
    }
}
