//! Organization membership port

use std::future::Future;

use thiserror::Error;

/// Errors from a membership lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The account is unknown to the organization
    #[error("{0} is not a member")]
    NotFound(String),

    /// The lookup itself failed
    #[error("membership lookup failed: {0}")]
    Unavailable(String),
}

/// Source of organization membership
pub trait MemberDirectory {
    /// Whether `login` belongs to the organization
    ///
    /// `Err(LookupError::NotFound)` means "not a member", not a failure.
    fn is_member(&self, login: &str) -> impl Future<Output = Result<bool, LookupError>>;
}
