//! Violation model
//!
//! One reported non-compliance. The `message` is displayable as-is.

use serde::{Deserialize, Serialize};

use super::{Commit, Identity, SignoffTrailer};

/// A commit that failed the sign-off check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// SHA of the offending commit
    pub sha: String,
    /// Deep link to the commit inside the pull request
    pub url: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Committer name
    pub committer: String,
    /// Human-readable reason
    pub message: String,
}

impl Violation {
    /// Build a violation for `commit` with the reason rendered from `kind`
    ///
    /// An empty `pr_url` leaves `url` empty.
    #[must_use]
    pub fn new(commit: &Commit, author: &Identity, pr_url: &str, kind: &ViolationKind) -> Self {
        Self {
            sha: commit.sha.clone(),
            url: if pr_url.is_empty() {
                String::new()
            } else {
                commit_url(pr_url, &commit.sha)
            },
            author: author.name.clone(),
            email: author.email.clone(),
            committer: commit.committer.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            message: kind.to_string(),
        }
    }
}

/// Link to a commit within a pull request: `<prefix>/commits/<sha>`
#[must_use]
pub fn commit_url(pr_url: &str, sha: &str) -> String {
    format!("{}/commits/{sha}", pr_url.trim_end_matches('/'))
}

/// Reasons a commit can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// No sign-off trailer at all
    MissingSignoff,
    /// Exempt author, but the commit is not verified
    UnverifiedMember,
    /// The author email is not an address
    InvalidEmail(String),
    /// The only sign-off belongs to someone else
    Mismatch {
        /// The author
        expected: Identity,
        /// The sign-off found
        got: SignoffTrailer,
    },
    /// None of several sign-offs belong to the author or committer
    NotFound {
        /// The author
        expected: Identity,
        /// All sign-offs found, in discovery order
        candidates: Vec<SignoffTrailer>,
    },
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSignoff => write!(f, "The sign-off is missing."),
            Self::UnverifiedMember => write!(f, "Commit by organization member is not verified."),
            Self::InvalidEmail(email) => write!(f, "{email} is not a valid email address."),
            Self::Mismatch { expected, got } => {
                write!(f, "Expected \"{expected}\", but got \"{got}\".")
            },
            Self::NotFound {
                expected,
                candidates,
            } => {
                let got = candidates.iter().map(|t| format!("\"{t}\"")).collect::<Vec<_>>();
                write!(f, "Can not find \"{expected}\", in [{}].", got.join(", "))
            },
        }
    }
}
