//! Command implementations

mod check;
mod remediate;
mod status;

pub use check::check;
pub use remediate::remediate;
pub use status::status;

use anyhow::Context;
use log::{debug, info};

use dco::adapters::toml::resolve_config;
use dco::adapters::{ConfiguredRequirement, GitRangeSource, JsonCommitSource};
use dco::core::models::{Commit, RemediationPolicy, Violation};
use dco::core::ports::CommitSource;
use dco::core::services::{CachedRequirement, MembershipCache, evaluate};

use super::app::InputArgs;

/// Revision checked when neither `--range` nor `--commits` is given
const DEFAULT_RANGE: &str = "HEAD";

/// Outcome of evaluating the selected commits
#[derive(Debug)]
struct Evaluation {
    commits_checked: usize,
    reaches_root: bool,
    violations: Vec<Violation>,
    policy: RemediationPolicy,
}

/// Load configuration and commits, then evaluate them
fn evaluate_input(input: &InputArgs) -> anyhow::Result<Evaluation> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(input.config.as_deref(), &cwd)?;

    let source: Box<dyn CommitSource> = match (&input.commits, &input.range) {
        (Some(path), _) => Box::new(JsonCommitSource::new(path)),
        (None, Some(range)) => Box::new(GitRangeSource::new(&cwd, range)),
        (None, None) => Box::new(GitRangeSource::new(&cwd, DEFAULT_RANGE)),
    };
    let commits = source
        .load_commits()
        .with_context(|| format!("loading commits from {}", source.describe()))?;
    info!("checking {} commit(s) from {}", commits.len(), source.describe());

    let pr_url = input
        .pr_url
        .as_deref()
        .or(config.pull_request_url.as_deref())
        .unwrap_or_default();
    let policy = config.remediation();
    debug!("remediation policy: {policy:?}");

    let mut cache = MembershipCache::new();
    let mut requirement =
        CachedRequirement::new(ConfiguredRequirement::from_config(&config), &mut cache);

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let violations = runtime.block_on(evaluate(&commits, &mut requirement, pr_url, policy))?;

    Ok(Evaluation {
        commits_checked: commits.len(),
        reaches_root: commits.iter().any(Commit::is_root),
        violations,
        policy,
    })
}
