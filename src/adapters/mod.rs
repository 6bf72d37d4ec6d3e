//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - commits from a local repository (`git2`)
//! - `json/` - commits from a platform JSON export
//! - `toml/` - `.dco.toml` discovery and loading
//! - `membership` - configured member directory and requirement strategy

pub mod git;
pub mod json;
pub mod membership;
pub mod toml;

pub use git::GitRangeSource;
pub use json::JsonCommitSource;
pub use membership::{ConfiguredRequirement, StaticDirectory};
