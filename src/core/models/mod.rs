//! Domain models for repo-audit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Check`] - "This file must (not) contain this pattern"
//! - [`RepositoryId`] - A validated `owner/repo` identifier
//! - [`CheckResult`] - Outcome of one check against one repository
//! - [`RepositorySource`] - Where the repository list comes from

mod check;
mod repository;
mod result;
mod source;

pub use check::{Check, Exclusion, Requirement};
pub use repository::RepositoryId;
pub use result::CheckResult;
pub use source::RepositorySource;
