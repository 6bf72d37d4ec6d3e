//! Sign-off evaluator
//!
//! Walks the commits of a pull request in order and reports every commit that
//! lacks a sign-off attributable to its author or committer.
//!
//! Per commit:
//! 1. Merge commits, commits without an author and bot commits are skipped.
//! 2. The requirement capability decides whether the author must sign off;
//!    exempt authors with a verified commit are skipped.
//! 3. Explicit trailers plus accepted remediation claims are collected.
//! 4. The trailers are resolved into at most one [`ViolationKind`].
//!
//! Violations come back in commit order.

use log::{debug, trace};
use thiserror::Error;

use crate::core::models::{
    Commit, Identity, RemediationPolicy, SignoffTrailer, Violation, ViolationKind,
};
use crate::core::ports::SignoffRequirement;
use crate::shared::parser::{parse_signoffs, validate_email};

use super::RemediationIndex;

/// Errors that abort an evaluation
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The sign-off requirement could not be determined for an author
    #[error("could not determine sign-off requirement for {login}")]
    Requirement {
        /// Platform login that was looked up
        login: String,
        /// Underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Evaluate `commits` and return the violations, in commit order
///
/// `pr_url` is the prefix used to build each violation's link
/// (`<pr_url>/commits/<sha>`). An empty result means every commit complies.
pub async fn evaluate<R: SignoffRequirement>(
    commits: &[Commit],
    requirement: &mut R,
    pr_url: &str,
    policy: RemediationPolicy,
) -> Result<Vec<Violation>, EvaluateError> {
    let index = RemediationIndex::build(commits, policy);
    debug!("evaluating {} commit(s), {} remediation claim(s)", commits.len(), index.len());

    let mut violations = Vec::new();

    for commit in commits {
        if commit.is_merge() {
            trace!("{}: merge commit", commit.short_sha());
            continue;
        }
        let Some(author) = commit.author.as_ref() else {
            trace!("{}: no author", commit.short_sha());
            continue;
        };
        if commit.author_is_bot {
            trace!("{}: bot author", commit.short_sha());
            continue;
        }

        // No platform account means nobody can vouch for the author.
        let signoff_required = match commit.author_login.as_deref() {
            Some(login) => requirement.is_required(login).await.map_err(|err| {
                EvaluateError::Requirement {
                    login: login.to_string(),
                    source: err.into(),
                }
            })?,
            None => true,
        };
        if !signoff_required && commit.verified() {
            trace!("{}: verified commit by exempt author", commit.short_sha());
            continue;
        }

        let trailers = collect_trailers(commit, &index);
        if let Some(kind) = resolve(commit, author, &trailers, signoff_required) {
            debug!("{}: {kind}", commit.short_sha());
            violations.push(Violation::new(commit, author, pr_url, &kind));
        }
    }

    Ok(violations)
}

/// Explicit trailers of `commit` followed by the remediation trailers targeting it
#[must_use]
pub fn collect_trailers(commit: &Commit, index: &RemediationIndex<'_>) -> Vec<SignoffTrailer> {
    let mut trailers = parse_signoffs(&commit.message);
    trailers.extend(index.trailers_for(commit));
    trailers
}

/// Decide the outcome for one commit from its collected trailers
#[must_use]
pub fn resolve(
    commit: &Commit,
    author: &Identity,
    trailers: &[SignoffTrailer],
    signoff_required: bool,
) -> Option<ViolationKind> {
    if trailers.is_empty() {
        if signoff_required {
            return Some(ViolationKind::MissingSignoff);
        }
        return (!commit.verified()).then_some(ViolationKind::UnverifiedMember);
    }

    let email = if author.email.is_empty() {
        commit.committer.as_ref().map_or("", |c| c.email.as_str())
    } else {
        author.email.as_str()
    };
    if let Err(err) = validate_email(email) {
        debug!("{}: {err}", commit.short_sha());
        return Some(ViolationKind::InvalidEmail(email.to_string()));
    }

    let committer = commit.committer.as_ref();
    match trailers {
        [only] => (!only.signs_for(author, committer)).then(|| ViolationKind::Mismatch {
            expected: author.clone(),
            got: only.clone(),
        }),
        _ => (!trailers.iter().any(|t| t.signs_for(author, committer))).then(|| {
            ViolationKind::NotFound {
                expected: author.clone(),
                candidates: trailers.to_vec(),
            }
        }),
    }
}
