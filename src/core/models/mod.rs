//! Domain models for dco
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Commit`] - A read-only snapshot of one pull request commit
//! - [`Identity`] - A `name <email>` pair
//! - [`SignoffTrailer`] - A sign-off accepted for a commit
//! - [`RemediationClaim`] - "I hereby add my Signed-off-by to this commit"
//! - [`Violation`] - One reported non-compliance
//! - [`RemediationPolicy`] - Which remediation claims are honored

mod claim;
mod commit;
mod identity;
mod policy;
mod trailer;
mod violation;

pub(crate) use claim::CLAIM_PHRASE;
pub use claim::{ClaimKind, RemediationClaim};
pub use commit::Commit;
pub use identity::Identity;
pub use policy::RemediationPolicy;
pub use trailer::{SignoffTrailer, TrailerKind};
pub use violation::{Violation, ViolationKind, commit_url};
