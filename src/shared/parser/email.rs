//! Email address validation
//!
//! A pragmatic syntactic check: one `@`, a dot-atom local part and a dotted
//! domain with a top-level label of at least two characters.

use thiserror::Error;

/// Maximum length of the local part
const MAX_LOCAL_LEN: usize = 64;

/// Characters allowed in the local part besides alphanumerics and `.`
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

/// A syntactically valid email address, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAddress<'a> {
    /// Part before the `@`
    pub local: &'a str,
    /// Part after the `@`
    pub domain: &'a str,
}

/// Why an email address was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Empty string
    #[error("email is empty")]
    Empty,

    /// Contains spaces, tabs or newlines
    #[error("email contains whitespace")]
    Whitespace,

    /// Zero or several `@`
    #[error("email must contain exactly one '@'")]
    AtSign,

    /// Nothing before the `@`
    #[error("email local part is empty")]
    EmptyLocal,

    /// Local part over 64 characters
    #[error("email local part is longer than 64 characters")]
    LocalTooLong,

    /// Disallowed character or misplaced dot in the local part
    #[error("email local part {0:?} is invalid")]
    InvalidLocal(String),

    /// Domain without a dot, or a one-letter top-level label
    #[error("email domain {0:?} has no top-level domain")]
    MissingTld(String),

    /// Empty label, bad character or leading/trailing hyphen
    #[error("email domain label {0:?} is invalid")]
    InvalidLabel(String),
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<EmailAddress<'_>, EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if email.contains(char::is_whitespace) {
        return Err(EmailError::Whitespace);
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(EmailError::AtSign);
    };

    validate_local(local)?;
    validate_domain(domain)?;

    Ok(EmailAddress { local, domain })
}

fn validate_local(local: &str) -> Result<(), EmailError> {
    if local.is_empty() {
        return Err(EmailError::EmptyLocal);
    }
    if local.chars().count() > MAX_LOCAL_LEN {
        return Err(EmailError::LocalTooLong);
    }
    let chars_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || LOCAL_SPECIALS.contains(c));
    if !chars_ok || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(EmailError::InvalidLocal(local.to_string()));
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailError> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(EmailError::MissingTld(domain.to_string()));
    }

    for label in &labels {
        let label_ok = !label.is_empty()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-');
        if !label_ok {
            return Err(EmailError::InvalidLabel((*label).to_string()));
        }
    }

    let tld = labels.last().copied().unwrap_or_default();
    if tld.len() < 2 || tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(EmailError::MissingTld(domain.to_string()));
    }
    Ok(())
}
