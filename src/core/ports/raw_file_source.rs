//! Raw file source port
//!
//! Defines the interface for reading a single file from a repository branch.

use crate::core::models::RepositoryId;
use crate::error::Result;

/// Response to a single raw file request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// The branch served the file; body is returned verbatim
    Found(String),
    /// The server answered with a non-success status
    Missing(u16),
}

/// Source of raw file contents
///
/// Implementations return `Err` only for transport failures. Any HTTP
/// answer, successful or not, is a `RawResponse`.
pub trait RawFileSource {
    /// Request `path` from `branch` of `repository`
    fn get_raw(&self, repository: &RepositoryId, branch: &str, path: &str) -> Result<RawResponse>;
}
