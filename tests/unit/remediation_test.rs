//! Tests for remediation commits
//!
//! A later commit can sign off an earlier one with an individual claim
//! ("I, ...") or a third-party claim ("On behalf of ..., I, ..."), as long as
//! the repository enables that kind.

use dco::core::models::{Commit, Identity, RemediationPolicy, Violation};
use dco::core::services::evaluate;

use crate::common::fixtures::{
    PR_URL, SHA_A, SHA_B, SHA_C, bex, commit, individual_claim, third_party_claim,
};
use crate::common::mocks::MockRequirement;

async fn check(commits: &[Commit], policy: RemediationPolicy) -> Vec<Violation> {
    let mut requirement = MockRequirement::required();
    evaluate(commits, &mut requirement, PR_URL, policy).await.unwrap()
}

fn legal() -> Identity {
    Identity::new("Legal Rep", "legal@disney.com")
}

fn remediation_by(author: Identity, body: &str) -> Commit {
    let message = format!("Remediation\n\n{body}\n\nSigned-off-by: {author}");
    commit(SHA_B, &message, author, "remediator")
}

// =============================================================================
// INDIVIDUAL REMEDIATION
// =============================================================================

#[tokio::test]
async fn individual_remediation_signs_off_earlier_commit() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(bex(), &individual_claim(&bex(), SHA_A)),
    ];
    assert!(check(&commits, RemediationPolicy::individual()).await.is_empty());
}

#[tokio::test]
async fn individual_remediation_ignored_when_disabled() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(bex(), &individual_claim(&bex(), SHA_A)),
    ];
    let violations = check(&commits, RemediationPolicy::disabled()).await;
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].sha, SHA_A);
    assert_eq!(violations[0].message, "The sign-off is missing.");
}

#[tokio::test]
async fn one_remediation_commit_covers_several_commits() {
    let body = format!(
        "{}\n{}",
        individual_claim(&bex(), SHA_A),
        individual_claim(&bex(), SHA_C)
    );
    let commits = [
        commit(SHA_A, "first", bex(), "hiimbex"),
        remediation_by(bex(), &body),
        commit(SHA_C, "third", bex(), "hiimbex"),
    ];
    assert!(check(&commits, RemediationPolicy::individual()).await.is_empty());
}

#[tokio::test]
async fn individual_claim_must_come_from_the_author() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(legal(), &individual_claim(&bex(), SHA_A)),
    ];
    let violations = check(&commits, RemediationPolicy::all()).await;
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].sha, SHA_A);
}

#[tokio::test]
async fn individual_claim_for_other_identity_is_rejected() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(legal(), &individual_claim(&legal(), SHA_A)),
    ];
    let violations = check(&commits, RemediationPolicy::all()).await;
    assert_eq!(violations.len(), 1);
}

#[tokio::test]
async fn remediation_adds_to_wrong_explicit_signoff() {
    let wrong = "fix\n\nSigned-off-by: hiimbex <hiimbex@disney.com>";
    let commits = [
        commit(SHA_A, wrong, bex(), "hiimbex"),
        remediation_by(bex(), &individual_claim(&bex(), SHA_A)),
    ];
    assert!(check(&commits, RemediationPolicy::individual()).await.is_empty());
}

// =============================================================================
// THIRD-PARTY REMEDIATION
// =============================================================================

#[tokio::test]
async fn third_party_remediation_with_both_flags() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(legal(), &third_party_claim(&bex(), &legal(), SHA_A)),
    ];
    assert!(check(&commits, RemediationPolicy::all()).await.is_empty());
}

#[tokio::test]
async fn third_party_remediation_needs_individual_flag_too() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(legal(), &third_party_claim(&bex(), &legal(), SHA_A)),
    ];
    let third_only = RemediationPolicy {
        individual: false,
        third_party: true,
    };
    assert_eq!(check(&commits, third_only).await.len(), 1);
    assert_eq!(check(&commits, RemediationPolicy::individual()).await.len(), 1);
}

#[tokio::test]
async fn third_party_claim_accepted_from_committer() {
    let message = format!(
        "Remediation\n\n{}\n\nSigned-off-by: {}",
        third_party_claim(&bex(), &legal(), SHA_A),
        legal()
    );
    let remediation = Commit::new(SHA_B, message, Identity::new("Bot", "bot@disney.com"))
        .with_committer(legal())
        .with_login("legal");
    let commits = [commit(SHA_A, "forgot to sign off", bex(), "hiimbex"), remediation];
    assert!(check(&commits, RemediationPolicy::all()).await.is_empty());
}

#[tokio::test]
async fn third_party_claim_on_behalf_of_someone_else() {
    let other = Identity::new("Someone", "someone@disney.com");
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(legal(), &third_party_claim(&other, &legal(), SHA_A)),
    ];
    assert_eq!(check(&commits, RemediationPolicy::all()).await.len(), 1);
}

#[tokio::test]
async fn third_party_claim_by_impostor() {
    let commits = [
        commit(SHA_A, "forgot to sign off", bex(), "hiimbex"),
        remediation_by(
            Identity::new("Mallory", "mallory@evil.io"),
            &third_party_claim(&bex(), &legal(), SHA_A),
        ),
    ];
    let violations = check(&commits, RemediationPolicy::all()).await;
    let shas: Vec<&str> = violations.iter().map(|v| v.sha.as_str()).collect();
    assert_eq!(shas, vec![SHA_A]);
}
