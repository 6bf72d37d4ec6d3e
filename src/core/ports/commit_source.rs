//! Commit source port
//!
//! Defines where the commits of a pull request come from.

use crate::core::models::Commit;

/// Supplies the ordered commit list to evaluate (oldest first)
pub trait CommitSource {
    /// Load the commits
    fn load_commits(&self) -> anyhow::Result<Vec<Commit>>;

    /// Short description for log output (e.g. the range or file name)
    fn describe(&self) -> String;
}
