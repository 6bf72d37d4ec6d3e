//! Membership and requirement wiring from configuration

use std::collections::HashSet;
use std::future::{Future, ready};

use log::{debug, warn};

use crate::config::DcoConfig;
use crate::core::ports::{LookupError, MemberDirectory, SignoffRequirement};
use crate::core::services::{AlwaysRequired, NonMembersRequired, NonOwnerRequired};

/// Organization members listed in `.dco.toml`
///
/// Logins compare case-insensitively. Unknown logins answer
/// `LookupError::NotFound`, like a platform membership endpoint returning 404.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    members: HashSet<String>,
}

impl StaticDirectory {
    /// Build a directory from a list of logins
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            members: members.into_iter().map(|m| m.as_ref().to_lowercase()).collect(),
        }
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberDirectory for StaticDirectory {
    fn is_member(&self, login: &str) -> impl Future<Output = Result<bool, LookupError>> {
        let result = if self.members.contains(&login.to_lowercase()) {
            Ok(true)
        } else {
            Err(LookupError::NotFound(login.to_string()))
        };
        ready(result)
    }
}

/// The requirement strategy selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredRequirement {
    /// `require.members = true`
    Always(AlwaysRequired),
    /// Exempt the configured organization members
    NonMembers(NonMembersRequired<StaticDirectory>),
    /// Exempt the repository owner
    NonOwner(NonOwnerRequired),
}

impl ConfiguredRequirement {
    /// Pick a strategy for `config`
    ///
    /// Relaxing `require.members` without naming members or an owner leaves
    /// nobody exempt, so everyone is required to sign off.
    #[must_use]
    pub fn from_config(config: &DcoConfig) -> Self {
        if config.require.members {
            return Self::Always(AlwaysRequired);
        }

        let organization = &config.organization;
        if !organization.members.is_empty() {
            let directory = StaticDirectory::new(&organization.members);
            debug!("exempting {} organization member(s)", directory.len());
            return Self::NonMembers(NonMembersRequired::new(directory));
        }
        if let Some(owner) = &organization.owner {
            debug!("exempting repository owner {owner}");
            return Self::NonOwner(NonOwnerRequired::new(owner.clone()));
        }

        warn!("require.members is false but no members or owner are configured");
        Self::Always(AlwaysRequired)
    }
}

impl SignoffRequirement for ConfiguredRequirement {
    async fn is_required(&mut self, login: &str) -> anyhow::Result<bool> {
        match self {
            Self::Always(inner) => inner.is_required(login).await,
            Self::NonMembers(inner) => inner.is_required(login).await,
            Self::NonOwner(inner) => inner.is_required(login).await,
        }
    }
}
