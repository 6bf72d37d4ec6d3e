//! Repository configuration
//!
//! Settings are read from `.dco.toml` at the repository root. Every section is
//! optional; an absent file behaves like an empty one.
//!
//! ```toml
//! [require]
//! members = false
//!
//! [allow_remediation_commits]
//! individual = true
//! third_party = true
//!
//! [organization]
//! members = ["octocat"]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::RemediationPolicy;

/// File name looked up in the repository root
pub const CONFIG_FILE: &str = ".dco.toml";

/// Contents of `.dco.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DcoConfig {
    /// Pull request link used as prefix for commit links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_url: Option<String>,

    /// Who has to sign off
    pub require: RequireConfig,

    /// Which remediation commits are honored
    pub allow_remediation_commits: RemediationPolicy,

    /// Organization the repository belongs to
    pub organization: OrganizationConfig,
}

/// `[require]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequireConfig {
    /// Organization members must sign off as well
    pub members: bool,
}

impl Default for RequireConfig {
    fn default() -> Self {
        Self { members: true }
    }
}

/// `[organization]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Logins exempt from signing off when `require.members` is off
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,

    /// Repository owner, for repositories outside an organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl DcoConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Remediation policy to evaluate with
    #[must_use]
    pub const fn remediation(&self) -> RemediationPolicy {
        self.allow_remediation_commits
    }
}
