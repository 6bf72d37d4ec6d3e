//! Shared commit fixtures
//!
//! Identities and shas mirror a small pull request with a handful of
//! contributors, so expected messages read naturally in assertions.

use dco::core::models::{Commit, Identity};

pub const SHA_A: &str = "18aebfa67dde85da0f5099ad70ef647685a05205";
pub const SHA_B: &str = "d5f3e2be498459554b6465224b7b6f7c0682295e";
pub const SHA_C: &str = "966587f0902920ed656950b0766e1073f8a532c0";

pub const PR_URL: &str = "https://github.com/hiimbex/testing-things/pull/1";

pub fn brandon() -> Identity {
    Identity::new("Brandon Keepers", "bkeepers@github.com")
}

pub fn bex() -> Identity {
    Identity::new("bex", "bex@disney.com")
}

pub fn committer() -> Identity {
    Identity::new("Bex Warner", "bexmwarner@gmail.com")
}

/// A commit authored by `author`, committed by [`committer`], linked to `login`
pub fn commit(sha: &str, message: &str, author: Identity, login: &str) -> Commit {
    Commit::new(sha, message, author).with_committer(committer()).with_login(login)
}

/// A commit whose author email is not linked to a platform account
pub fn unlinked(sha: &str, message: &str, author: Identity) -> Commit {
    Commit::new(sha, message, author).with_committer(committer())
}

/// Commit link as the evaluator builds it
pub fn url_for(sha: &str) -> String {
    format!("{PR_URL}/commits/{sha}")
}

/// Individual remediation line for `signer` and `sha`
pub fn individual_claim(signer: &Identity, sha: &str) -> String {
    format!("I, {signer}, hereby add my Signed-off-by to this commit: {sha}")
}

/// Third-party remediation line
pub fn third_party_claim(original: &Identity, signer: &Identity, sha: &str) -> String {
    format!(
        "On behalf of {original}, I, {signer}, hereby add my Signed-off-by to this commit: {sha}"
    )
}
