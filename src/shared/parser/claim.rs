//! Remediation claim grammar
//!
//! ```text
//! individual  := "I, " identity PHRASE sha
//! third_party := "On behalf of " identity ", I, " identity PHRASE sha
//! PHRASE      := ", hereby add my Signed-off-by to this commit: "
//! ```
//!
//! Literals match ASCII case-insensitively; the sha is a single token.

use crate::core::models::{CLAIM_PHRASE, RemediationClaim};

use super::{split_leading_identity, strip_prefix_ignore_case};

const INDIVIDUAL_PREFIX: &str = "I, ";
const THIRD_PARTY_PREFIX: &str = "On behalf of ";
const THIRD_PARTY_SIGNER: &str = ", I, ";

/// Extract every remediation claim from a commit message, in order
#[must_use]
pub fn parse_claims(message: &str) -> Vec<RemediationClaim> {
    message.lines().filter_map(parse_claim_line).collect()
}

/// Parse a single claim line of either form
#[must_use]
pub fn parse_claim_line(line: &str) -> Option<RemediationClaim> {
    let line = line.trim_end();

    if let Some(rest) = strip_prefix_ignore_case(line, THIRD_PARTY_PREFIX) {
        let (original, rest) = split_leading_identity(rest)?;
        let rest = strip_prefix_ignore_case(rest, THIRD_PARTY_SIGNER)?;
        let (signer, rest) = split_leading_identity(rest)?;
        let sha = parse_target(rest)?;
        return Some(RemediationClaim::third_party(original, signer, sha));
    }

    let rest = strip_prefix_ignore_case(line, INDIVIDUAL_PREFIX)?;
    let (signer, rest) = split_leading_identity(rest)?;
    let sha = parse_target(rest)?;
    Some(RemediationClaim::individual(signer, sha))
}

fn parse_target(rest: &str) -> Option<&str> {
    let sha = strip_prefix_ignore_case(rest, CLAIM_PHRASE)?.trim();
    (!sha.is_empty() && !sha.contains(char::is_whitespace)).then_some(sha)
}
