//! Build remediation commit messages

use anyhow::{Context, bail};

use dco::adapters::git::configured_identity;
use dco::core::models::Identity;
use dco::core::services::remediation_message;
use dco::output::{OutputMode, RemediationMessage};
use dco::shared::parser::parse_identity;

/// Print a commit message that signs off `shas` retroactively
pub fn remediate(
    shas: &[String],
    signer: Option<&str>,
    on_behalf_of: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if let Some(bad) = shas.iter().find(|s| s.is_empty() || s.contains(char::is_whitespace)) {
        bail!("invalid commit sha '{bad}'");
    }

    let signer = match signer {
        Some(text) => identity_arg(text)?,
        None => configured_identity(&std::env::current_dir()?)
            .context("pass --signer \"Name <email>\" or configure git user.name/user.email")?,
    };
    let on_behalf_of = on_behalf_of.map(identity_arg).transpose()?;

    let result = RemediationMessage {
        commits: shas.to_vec(),
        message: remediation_message(&signer, on_behalf_of.as_ref(), shas),
    };
    result.render(mode);
    Ok(())
}

fn identity_arg(text: &str) -> anyhow::Result<Identity> {
    parse_identity(text).with_context(|| format!("expected \"Name <email>\", got '{text}'"))
}
