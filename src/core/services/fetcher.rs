//! Fetch service - reads a file with a single branch fallback

use crate::core::models::RepositoryId;
use crate::core::ports::{RawFileSource, RawResponse};
use crate::error::{AuditError, Result};

/// Branch tried first
pub const PRIMARY_BRANCH: &str = "main";

/// Branch tried when the primary branch does not serve the file
pub const FALLBACK_BRANCH: &str = "master";

/// Fetch a file's raw contents from a repository
///
/// Tries [`PRIMARY_BRANCH`], then [`FALLBACK_BRANCH`] once on any
/// non-success response. Transport failures are returned as-is.
///
/// # Errors
///
/// - [`AuditError::NotFound`] if neither branch serves the file
/// - [`AuditError::Fetch`] on a transport failure
pub fn fetch_file(
    source: &impl RawFileSource,
    repository: &RepositoryId,
    path: &str,
) -> Result<String> {
    for branch in [PRIMARY_BRANCH, FALLBACK_BRANCH] {
        match source.get_raw(repository, branch, path)? {
            RawResponse::Found(body) => {
                log::debug!("Fetched {path} from {repository}@{branch}");
                return Ok(body);
            },
            RawResponse::Missing(status) => {
                log::debug!("{repository}@{branch} returned HTTP {status} for {path}");
            },
        }
    }

    Err(AuditError::NotFound {
        path: path.to_string(),
    })
}
