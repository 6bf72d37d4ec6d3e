//! Shared utilities used across the codebase
//!
//! - [`parser`] - Sign-off trailer, remediation claim and email grammars

pub mod parser;
