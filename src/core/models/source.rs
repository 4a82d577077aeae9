//! Repository list source
//!
//! Decided once from configuration, then resolved by
//! [`crate::core::services::resolve_repositories`].

/// Where the list of repositories to audit comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    /// A fixed list from configuration
    Static {
        /// Repository identifiers, in audit order
        repositories: Vec<String>,
    },
    /// Repositories in a GitHub organization tagged with a topic
    DynamicGithub {
        /// Organization to search
        organization: String,
        /// Topic the repositories must carry
        topic: String,
    },
}
