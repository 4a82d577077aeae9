//! Core domain logic for repo-audit
//!
//! This module contains pure business logic with no I/O dependencies.
//! All network access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Check, RepositoryId, CheckResult, RepositorySource)
//! - `services/` - Fetch fallback, pattern evaluation, check runs, report grouping
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
