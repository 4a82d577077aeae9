//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (raw file hosting, repository search).
//!
//! Implementations live in the `adapters` module.

mod raw_file_source;
mod repository_lister;

pub use raw_file_source::{RawFileSource, RawResponse};
pub use repository_lister::RepositoryLister;
