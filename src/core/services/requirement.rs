//! Sign-off requirement strategies
//!
//! - [`AlwaysRequired`] - everyone signs off (`require.members = true`)
//! - [`NonMembersRequired`] - organization members are exempt
//! - [`NonOwnerRequired`] - the repository owner is exempt
//! - [`CachedRequirement`] - memoizes any strategy in a caller-owned cache

use std::collections::HashMap;
use std::future::{Future, ready};

use log::debug;

use crate::core::ports::{LookupError, MemberDirectory, SignoffRequirement};

/// Login to "sign-off required" answers, owned by the caller
pub type MembershipCache = HashMap<String, bool>;

/// Every author must sign off
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRequired;

impl SignoffRequirement for AlwaysRequired {
    fn is_required(&mut self, _login: &str) -> impl Future<Output = anyhow::Result<bool>> {
        ready(Ok(true))
    }
}

/// Authors outside the organization must sign off
#[derive(Debug, Clone)]
pub struct NonMembersRequired<D> {
    directory: D,
}

impl<D: MemberDirectory> NonMembersRequired<D> {
    /// Create a strategy backed by `directory`
    pub const fn new(directory: D) -> Self {
        Self { directory }
    }
}

impl<D: MemberDirectory> SignoffRequirement for NonMembersRequired<D> {
    async fn is_required(&mut self, login: &str) -> anyhow::Result<bool> {
        match self.directory.is_member(login).await {
            Ok(member) => Ok(!member),
            Err(LookupError::NotFound(_)) => Ok(true),
            Err(err) => Err(err.into()),
        }
    }
}

/// Everyone but the repository owner must sign off
///
/// Used for repositories that do not belong to an organization.
#[derive(Debug, Clone)]
pub struct NonOwnerRequired {
    owner: String,
}

impl NonOwnerRequired {
    /// Create a strategy exempting `owner`
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

impl SignoffRequirement for NonOwnerRequired {
    fn is_required(&mut self, login: &str) -> impl Future<Output = anyhow::Result<bool>> {
        ready(Ok(!login.eq_ignore_ascii_case(&self.owner)))
    }
}

/// Memoizes another strategy per login
///
/// The cache is borrowed, so its lifetime (one evaluation, one webhook, one
/// process) is decided by the caller. Failed lookups are not cached.
#[derive(Debug)]
pub struct CachedRequirement<'c, R> {
    inner: R,
    cache: &'c mut MembershipCache,
}

impl<'c, R: SignoffRequirement> CachedRequirement<'c, R> {
    /// Wrap `inner` with `cache`
    pub const fn new(inner: R, cache: &'c mut MembershipCache) -> Self {
        Self { inner, cache }
    }

    /// Give back the wrapped strategy
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: SignoffRequirement> SignoffRequirement for CachedRequirement<'_, R> {
    async fn is_required(&mut self, login: &str) -> anyhow::Result<bool> {
        if let Some(&required) = self.cache.get(login) {
            debug!("requirement cache hit for {login}");
            return Ok(required);
        }
        let required = self.inner.is_required(login).await?;
        self.cache.insert(login.to_string(), required);
        Ok(required)
    }
}
