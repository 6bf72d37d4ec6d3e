//! Remediation claim model
//!
//! A remediation claim is a line in a later commit that retroactively adds a
//! sign-off to an earlier commit:
//!
//! ```text
//! I, Jane Doe <jane@example.com>, hereby add my Signed-off-by to this commit: 18aebfa6...
//! On behalf of Jane Doe <jane@example.com>, I, John Roe <john@corp.example>, hereby add my Signed-off-by to this commit: 18aebfa6...
//! ```

use serde::{Deserialize, Serialize};

use super::{Identity, TrailerKind};

/// Literal phrase shared by both claim forms
pub(crate) const CLAIM_PHRASE: &str = ", hereby add my Signed-off-by to this commit: ";

/// Kind of remediation claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    /// The author remediates their own commit
    Individual,
    /// Someone remediates on behalf of the author
    ThirdParty,
}

impl ClaimKind {
    /// Trailer kind produced by an accepted claim
    #[must_use]
    pub const fn trailer_kind(self) -> TrailerKind {
        match self {
            Self::Individual => TrailerKind::IndividualRemediation,
            Self::ThirdParty => TrailerKind::ThirdPartyRemediation,
        }
    }
}

/// A parsed remediation statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationClaim {
    /// Individual or third party
    pub kind: ClaimKind,
    /// The "I, name <email>" identity
    pub signer: Identity,
    /// Original author, third-party claims only
    pub on_behalf_of: Option<Identity>,
    /// SHA of the commit being remediated
    pub target_sha: String,
}

impl RemediationClaim {
    /// Build an individual claim
    pub fn individual(signer: Identity, target_sha: impl Into<String>) -> Self {
        Self {
            kind: ClaimKind::Individual,
            signer,
            on_behalf_of: None,
            target_sha: target_sha.into(),
        }
    }

    /// Build a third-party claim
    pub fn third_party(
        on_behalf_of: Identity,
        signer: Identity,
        target_sha: impl Into<String>,
    ) -> Self {
        Self {
            kind: ClaimKind::ThirdParty,
            signer,
            on_behalf_of: Some(on_behalf_of),
            target_sha: target_sha.into(),
        }
    }
}

impl std::fmt::Display for RemediationClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(original) = &self.on_behalf_of {
            write!(f, "On behalf of {original}, ")?;
        }
        write!(f, "I, {}{CLAIM_PHRASE}{}", self.signer, self.target_sha)
    }
}
