//! `.dco.toml` loading
//!
//! The configuration file is looked up from the working directory towards
//! the repository root; the first `.dco.toml` found wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::config::{CONFIG_FILE, DcoConfig};

/// Find the nearest `.dco.toml` from `from` up to the repository root
#[must_use]
pub fn find_config(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at repo root (.git) or filesystem root
        if current.join(".git").exists() {
            return None;
        }
        current = current.parent()?.to_path_buf();
    }
}

/// Load configuration from an explicit file
pub fn load_config(path: &Path) -> anyhow::Result<DcoConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    DcoConfig::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Load `explicit` if given, else the nearest `.dco.toml`, else defaults
pub fn resolve_config(explicit: Option<&Path>, from: &Path) -> anyhow::Result<DcoConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(from) {
            Some(found) => found,
            None => {
                debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(DcoConfig::default());
            },
        },
    };
    debug!("loading configuration from {}", path.display());
    load_config(&path)
}
