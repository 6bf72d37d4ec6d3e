//! Remediation claim index
//!
//! Claims live in *later* commits but apply to *earlier* ones, so every
//! commit's message is scanned once up front and the accepted claims are
//! grouped by the sha they target. Each target is then resolved against the
//! index instead of rescanning the whole commit list.

use std::collections::HashMap;

use log::debug;

use crate::core::models::{
    ClaimKind, Commit, Identity, RemediationClaim, RemediationPolicy, SignoffTrailer,
};
use crate::shared::parser::parse_claims;

/// A claim together with the commit that made it
#[derive(Debug, Clone)]
struct IndexedClaim<'a> {
    claim: RemediationClaim,
    by: &'a Commit,
}

impl IndexedClaim<'_> {
    /// Identity rules for a claim to count towards `target_author`
    fn accepts_for(&self, target_author: &Identity) -> bool {
        let signer = &self.claim.signer;
        match self.claim.kind {
            ClaimKind::Individual => self
                .by
                .author
                .as_ref()
                .is_some_and(|a| a.same_as(signer) && a.same_as(target_author)),
            ClaimKind::ThirdParty => {
                let for_author =
                    self.claim.on_behalf_of.as_ref().is_some_and(|o| o.same_as(target_author));
                let by_signer = [self.by.author.as_ref(), self.by.committer.as_ref()]
                    .into_iter()
                    .flatten()
                    .any(|p| p.same_as(signer));
                for_author && by_signer
            },
        }
    }
}

/// Remediation claims grouped by target sha
#[derive(Debug, Clone, Default)]
pub struct RemediationIndex<'a> {
    claims: HashMap<String, Vec<IndexedClaim<'a>>>,
}

impl<'a> RemediationIndex<'a> {
    /// Scan `commits` for claims the policy enables
    #[must_use]
    pub fn build(commits: &'a [Commit], policy: RemediationPolicy) -> Self {
        let mut claims: HashMap<String, Vec<IndexedClaim<'a>>> = HashMap::new();
        if !policy.scans_claims() {
            return Self { claims };
        }

        for commit in commits {
            for claim in parse_claims(&commit.message) {
                if claim.kind == ClaimKind::ThirdParty && !policy.accepts_third_party() {
                    debug!(
                        "{}: ignoring third-party claim for {}",
                        commit.short_sha(),
                        claim.target_sha
                    );
                    continue;
                }
                claims
                    .entry(claim.target_sha.to_ascii_lowercase())
                    .or_default()
                    .push(IndexedClaim { claim, by: commit });
            }
        }

        Self { claims }
    }

    /// Number of indexed claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.values().map(Vec::len).sum()
    }

    /// Whether no claims were indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Remediation trailers accepted for `target`, in claiming-commit order
    #[must_use]
    pub fn trailers_for(&self, target: &Commit) -> Vec<SignoffTrailer> {
        let Some(author) = target.author.as_ref() else {
            return Vec::new();
        };

        self.claims
            .get(&target.sha.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .filter(|entry| {
                let accepted = entry.accepts_for(author);
                if !accepted {
                    debug!(
                        "{}: claim from {} does not match the author",
                        target.short_sha(),
                        entry.by.short_sha()
                    );
                }
                accepted
            })
            .map(|entry| {
                SignoffTrailer::remediation(&entry.claim.signer, entry.claim.kind.trailer_kind())
            })
            .collect()
    }
}

/// Commit message for a remediation commit covering `shas`
///
/// One claim line per sha, followed by the signer's own sign-off so the
/// remediation commit itself complies.
#[must_use]
pub fn remediation_message(
    signer: &Identity,
    on_behalf_of: Option<&Identity>,
    shas: &[String],
) -> String {
    let claims: Vec<String> = shas
        .iter()
        .map(|sha| {
            let claim = match on_behalf_of {
                Some(original) => {
                    RemediationClaim::third_party(original.clone(), signer.clone(), sha.as_str())
                },
                None => RemediationClaim::individual(signer.clone(), sha.as_str()),
            };
            claim.to_string()
        })
        .collect();

    let subject = on_behalf_of.unwrap_or(signer);
    format!(
        "DCO Remediation Commit for {subject}\n\n{}\n\nSigned-off-by: {signer}\n",
        claims.join("\n")
    )
}
