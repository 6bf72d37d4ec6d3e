//! `Signed-off-by:` trailer grammar
//!
//! ```text
//! line    := prefix name " <" email ">" ws*
//! prefix  := "Signed-off-by: "      (ASCII case-insensitive, at line start)
//! name    := one or more chars, no '<' or '>'
//! email   := one or more chars, no '<' or '>'
//! ```
//!
//! Whitespace inside the name or the brackets is kept verbatim, so a trailer
//! with stray spaces is reported as a mismatch rather than silently accepted.

use crate::core::models::{Identity, SignoffTrailer};

use super::{split_trailing_identity, strip_prefix_ignore_case};

const SIGNOFF_PREFIX: &str = "Signed-off-by: ";

/// Extract every explicit sign-off from a commit message, in order
#[must_use]
pub fn parse_signoffs(message: &str) -> Vec<SignoffTrailer> {
    message.lines().filter_map(parse_signoff_line).collect()
}

/// Parse a single `Signed-off-by:` line
#[must_use]
pub fn parse_signoff_line(line: &str) -> Option<SignoffTrailer> {
    let rest = strip_prefix_ignore_case(line.trim_end(), SIGNOFF_PREFIX)?;
    let (name, email) = split_trailing_identity(rest)?;
    Some(SignoffTrailer::explicit(name, email))
}

/// Parse a bare `Name <email>` string, as typed on the command line
#[must_use]
pub fn parse_identity(input: &str) -> Option<Identity> {
    let (name, email) = split_trailing_identity(input.trim())?;
    Some(Identity::new(name, email))
}
