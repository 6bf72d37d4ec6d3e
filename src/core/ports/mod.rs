//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the sign-off rules and the
//! systems around them (git, the hosting platform, membership lookups).
//!
//! Implementations live in the `adapters` module and in
//! `core::services::requirement`.

mod commit_source;
mod directory;
mod requirement;

pub use commit_source::CommitSource;
pub use directory::{LookupError, MemberDirectory};
pub use requirement::SignoffRequirement;
