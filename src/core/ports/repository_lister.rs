//! Repository lister port
//!
//! Defines the interface for dynamic repository discovery.

use crate::error::Result;

/// Lists repositories from a hosting service
pub trait RepositoryLister {
    /// Repositories in `organization` tagged with `topic`, as `owner/repo`
    ///
    /// The order is whatever the service returns.
    fn list_by_topic(&self, organization: &str, topic: &str) -> Result<Vec<String>>;
}
