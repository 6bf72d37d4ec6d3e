//! Sign-off trailer model

use serde::{Deserialize, Serialize};

use super::Identity;

/// Where a sign-off came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerKind {
    /// `Signed-off-by:` line in the commit's own message
    Explicit,
    /// Claim by the same author in a later commit
    IndividualRemediation,
    /// Claim by someone acting on behalf of the author
    ThirdPartyRemediation,
}

impl TrailerKind {
    /// Remediation trailers were identity-checked when they were built
    #[must_use]
    pub const fn is_remediation(self) -> bool {
        matches!(self, Self::IndividualRemediation | Self::ThirdPartyRemediation)
    }
}

/// A sign-off attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignoffTrailer {
    /// Name as written, whitespace preserved
    pub name: String,
    /// Email as written between the angle brackets
    pub email: String,
    /// Source of the sign-off
    pub kind: TrailerKind,
}

impl SignoffTrailer {
    /// Create an explicit trailer
    pub fn explicit(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            kind: TrailerKind::Explicit,
        }
    }

    /// Create a trailer from a remediation signer
    #[must_use]
    pub fn remediation(signer: &Identity, kind: TrailerKind) -> Self {
        Self {
            name: signer.name.clone(),
            email: signer.email.clone(),
            kind,
        }
    }

    /// Whether this trailer signs for the author or the committer
    #[must_use]
    pub fn signs_for(&self, author: &Identity, committer: Option<&Identity>) -> bool {
        if self.kind.is_remediation() {
            return true;
        }
        author.matches(&self.name, &self.email)
            || committer.is_some_and(|c| c.matches(&self.name, &self.email))
    }
}

impl std::fmt::Display for SignoffTrailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
