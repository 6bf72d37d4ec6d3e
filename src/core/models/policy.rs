//! Remediation policy
//!
//! Controls which remediation claims are honored during evaluation.

use serde::{Deserialize, Serialize};

/// Which kinds of remediation commits are accepted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationPolicy {
    /// Accept "I, name <email>, hereby add my Signed-off-by..." from the author
    pub individual: bool,
    /// Accept "On behalf of ..., I, ..." from a third party
    pub third_party: bool,
}

impl RemediationPolicy {
    /// Policy with both remediation kinds disabled
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            individual: false,
            third_party: false,
        }
    }

    /// Policy accepting individual remediation only
    #[must_use]
    pub const fn individual() -> Self {
        Self {
            individual: true,
            third_party: false,
        }
    }

    /// Policy accepting both individual and third-party remediation
    #[must_use]
    pub const fn all() -> Self {
        Self {
            individual: true,
            third_party: true,
        }
    }

    /// Whether any claims need to be scanned
    #[must_use]
    pub const fn scans_claims(self) -> bool {
        self.individual
    }

    /// Third-party claims ride on the individual scan
    #[must_use]
    pub const fn accepts_third_party(self) -> bool {
        self.individual && self.third_party
    }
}
