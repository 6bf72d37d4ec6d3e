//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`evaluator`] - Decide which commits violate the DCO
//! - [`remediation`] - Index remediation claims by target commit
//! - [`requirement`] - Sign-off requirement strategies and caching

pub mod evaluator;
pub mod remediation;
pub mod requirement;

pub use evaluator::{EvaluateError, collect_trailers, evaluate, resolve};
pub use remediation::{RemediationIndex, remediation_message};
pub use requirement::{
    AlwaysRequired, CachedRequirement, MembershipCache, NonMembersRequired, NonOwnerRequired,
};
