//! Commit message grammar
//!
//! Hand-written parsers for the text dco reads out of commit messages. Every
//! parser works line by line and returns structured results, so each corner
//! case can be tested on its own.
//!
//! - [`signoff`] - `Signed-off-by: Name <email>` trailers
//! - [`claim`] - Remediation claims
//! - [`email`] - Email address validation

mod claim;
mod email;
mod signoff;

pub use claim::{parse_claim_line, parse_claims};
pub use email::{EmailAddress, EmailError, validate_email};
pub use signoff::{parse_identity, parse_signoff_line, parse_signoffs};

use crate::core::models::Identity;

/// ASCII case-insensitive `strip_prefix`
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Split `name <email>rest` at the first bracket pair
///
/// The name must be non-empty, free of angle brackets and separated from the
/// bracket by a single space; the email must be non-empty and unnested.
fn split_leading_identity(input: &str) -> Option<(Identity, &str)> {
    let lt = input.find('<')?;
    let name = input[..lt].strip_suffix(' ')?;
    let after = &input[lt + 1..];
    let gt = after.find('>')?;
    let email = &after[..gt];
    if !is_valid_name(name) || email.is_empty() {
        return None;
    }
    Some((Identity::new(name, email), &after[gt + 1..]))
}

/// Split `name <email>` where the bracket pair ends the input
fn split_trailing_identity(input: &str) -> Option<(&str, &str)> {
    let body = input.strip_suffix('>')?;
    let lt = body.rfind('<')?;
    let email = &body[lt + 1..];
    let name = body[..lt].strip_suffix(' ')?;
    if !is_valid_name(name) || email.is_empty() || email.contains('>') {
        return None;
    }
    Some((name, email))
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['<', '>'])
}
