//! Commit model
//!
//! One entry in a pull request's commit list, as handed to the evaluator.

use serde::{Deserialize, Serialize};

use super::Identity;

/// A read-only snapshot of a commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA
    pub sha: String,

    /// Full commit message
    pub message: String,

    /// Git author, if the commit records one
    pub author: Option<Identity>,

    /// Git committer, if the commit records one
    pub committer: Option<Identity>,

    /// Platform account handle of the author (absent for unlinked emails)
    #[serde(default)]
    pub author_login: Option<String>,

    /// Whether the platform account is a bot
    #[serde(default)]
    pub author_is_bot: bool,

    /// Number of parents; two or more means a merge commit
    #[serde(default)]
    pub parent_count: usize,

    /// Platform-attested signature status
    #[serde(default)]
    pub is_verified: Option<bool>,
}

impl Commit {
    /// Create a commit with a message and an author who also committed it
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>, author: Identity) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            committer: Some(author.clone()),
            author: Some(author),
            parent_count: 1,
            ..Self::default()
        }
    }

    /// Set a different committer
    #[must_use]
    pub fn with_committer(mut self, committer: Identity) -> Self {
        self.committer = Some(committer);
        self
    }

    /// Set the platform login of the author
    #[must_use]
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.author_login = Some(login.into());
        self
    }

    /// Set the platform verification status
    #[must_use]
    pub const fn with_verified(mut self, verified: bool) -> Self {
        self.is_verified = Some(verified);
        self
    }

    /// Set the parent count
    #[must_use]
    pub const fn with_parents(mut self, parent_count: usize) -> Self {
        self.parent_count = parent_count;
        self
    }

    /// Mark the author account as a bot
    #[must_use]
    pub const fn as_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }

    /// Whether this is a merge commit
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent_count > 1
    }

    /// Whether this is the first commit of the history
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_count == 0
    }

    /// Whether the platform attested the commit signature
    #[must_use]
    pub fn verified(&self) -> bool {
        self.is_verified == Some(true)
    }

    /// Abbreviated SHA for display
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}
