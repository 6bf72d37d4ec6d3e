//! Identity model
//!
//! The `name <email>` pair found on commit authors, committers, sign-off
//! trailers and remediation claims.

use serde::{Deserialize, Serialize};

/// A person as recorded in git: display name plus email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl Identity {
    /// Create a new identity
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive comparison of both name and email
    #[must_use]
    pub fn matches(&self, name: &str, email: &str) -> bool {
        eq_ignore_case(&self.name, name) && eq_ignore_case(&self.email, email)
    }

    /// Case-insensitive comparison against another identity
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.matches(&other.name, &other.email)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
