//! Local git repository adapter
//!
//! Implements `CommitSource` with `git2`. Commits come out oldest first
//! (topological, reversed), which is the order a pull request lists them.
//!
//! Local history has no platform accounts, so every commit carries no login,
//! is not a bot and has no verification status.

use std::path::{Path, PathBuf};

use anyhow::Context;
use git2::{Repository, Revwalk, Signature, Sort};
use log::debug;

use crate::core::models::{Commit, Identity};
use crate::core::ports::CommitSource;

/// Commits reachable from a revision range of a local repository
#[derive(Debug, Clone)]
pub struct GitRangeSource {
    /// Any path inside the repository
    workdir: PathBuf,
    /// `base..head`, or a single revision for its full history
    range: String,
}

impl GitRangeSource {
    /// Create a source for `range` in the repository containing `workdir`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>, range: impl Into<String>) -> Self {
        Self {
            workdir: workdir.into(),
            range: range.into(),
        }
    }

    fn open(&self) -> anyhow::Result<Repository> {
        Repository::discover(&self.workdir)
            .with_context(|| format!("no git repository at {}", self.workdir.display()))
    }

    fn walk<'r>(&self, repo: &'r Repository) -> anyhow::Result<Revwalk<'r>> {
        let mut walk = repo.revwalk()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        if self.range.contains("..") {
            walk.push_range(&self.range)
                .with_context(|| format!("invalid revision range '{}'", self.range))?;
        } else {
            let head = repo
                .revparse_single(&self.range)
                .and_then(|object| object.peel_to_commit())
                .with_context(|| format!("unknown revision '{}'", self.range))?;
            walk.push(head.id())?;
        }
        Ok(walk)
    }
}

impl CommitSource for GitRangeSource {
    fn load_commits(&self) -> anyhow::Result<Vec<Commit>> {
        let repo = self.open()?;
        let mut commits = Vec::new();

        for oid in self.walk(&repo)? {
            let commit = repo.find_commit(oid?)?;
            commits.push(Commit {
                sha: commit.id().to_string(),
                message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
                author: Some(identity(&commit.author())),
                committer: Some(identity(&commit.committer())),
                author_login: None,
                author_is_bot: false,
                parent_count: commit.parent_count(),
                is_verified: None,
            });
        }

        debug!("loaded {} commit(s) from {}", commits.len(), self.describe());
        Ok(commits)
    }

    fn describe(&self) -> String {
        format!("git range {}", self.range)
    }
}

fn identity(signature: &Signature<'_>) -> Identity {
    Identity::new(
        String::from_utf8_lossy(signature.name_bytes()),
        String::from_utf8_lossy(signature.email_bytes()),
    )
}

/// The `user.name` / `user.email` identity configured for the repository
pub fn configured_identity(workdir: &Path) -> anyhow::Result<Identity> {
    let repo = Repository::discover(workdir)
        .with_context(|| format!("no git repository at {}", workdir.display()))?;
    let config = repo.config()?;
    let name = config.get_string("user.name").context("git user.name is not set")?;
    let email = config.get_string("user.email").context("git user.email is not set")?;
    Ok(Identity::new(name, email))
}
