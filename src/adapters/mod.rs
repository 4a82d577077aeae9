//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - Raw file reads and topic search against GitHub over HTTP

pub mod github;

pub use github::GithubClient;
