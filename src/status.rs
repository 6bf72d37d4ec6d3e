//! Commit status view
//!
//! Condenses an evaluation into the single status a hosting platform shows
//! next to the pull request head. Status descriptions are limited to 140
//! characters by the platform, so only this view truncates.

use serde::{Deserialize, Serialize};

use crate::core::models::Violation;

/// Status context name
pub const STATUS_CONTEXT: &str = "DCO";

/// Description reported when every commit passed
pub const SUCCESS_DESCRIPTION: &str = "All commits have a DCO sign-off from the author";

/// Where a failing status links to
pub const DOCS_URL: &str = "https://github.com/probot/dco#how-it-works";

/// Maximum description length accepted by the platform
pub const MAX_DESCRIPTION_LEN: usize = 140;

/// Status state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// All commits passed
    Success,
    /// At least one violation
    Failure,
}

/// A commit status as posted for the pull request head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Overall state
    pub state: StatusState,
    /// Short explanation, at most 140 characters
    pub description: String,
    /// Link to documentation, failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Always `DCO`
    pub context: String,
}

impl CommitStatus {
    /// Build the status for an evaluation result
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        match violations.first() {
            None => Self {
                state: StatusState::Success,
                description: SUCCESS_DESCRIPTION.to_string(),
                target_url: None,
                context: STATUS_CONTEXT.to_string(),
            },
            Some(first) => Self {
                state: StatusState::Failure,
                description: truncate(&first.message, MAX_DESCRIPTION_LEN),
                target_url: Some(DOCS_URL.to_string()),
                context: STATUS_CONTEXT.to_string(),
            },
        }
    }

    /// Whether the status is a success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state == StatusState::Success
    }
}

/// Cut `text` to at most `max` characters, never splitting a character
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
