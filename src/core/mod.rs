//! Core sign-off rules
//!
//! This module contains pure business logic with no I/O dependencies.
//! Commits, membership answers and configuration are handed in; violations
//! come out.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Commit, Identity, SignoffTrailer, Violation)
//! - `services/` - Evaluation, remediation index, requirement strategies
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
