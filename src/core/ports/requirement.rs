//! Sign-off requirement port
//!
//! The evaluator asks this capability, once per eligible commit, whether the
//! commit's author must provide an explicit sign-off. Implementations may do
//! network lookups; the evaluator just awaits the answer.

use std::future::Future;

/// Decides whether a platform account must sign off explicitly
pub trait SignoffRequirement {
    /// `Ok(true)` when `login` must carry a `Signed-off-by` trailer
    ///
    /// Errors are propagated to the caller of the evaluator unchanged.
    fn is_required(&mut self, login: &str) -> impl Future<Output = anyhow::Result<bool>>;
}
