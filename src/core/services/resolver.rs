//! Repository resolver - decides and resolves the list of repositories
//!
//! The source is chosen once from configuration as a [`RepositorySource`];
//! resolution then delegates to a [`RepositoryLister`] only for the dynamic
//! variant.

use std::collections::HashSet;

use crate::config::{AuditConfig, ListingService};
use crate::core::models::RepositorySource;
use crate::core::ports::RepositoryLister;
use crate::error::{AuditError, Result};

/// Choose where repositories come from
///
/// An enabled `dynamicRepositories` block wins over a static list.
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] if there is neither an enabled
/// dynamic source nor a non-empty static list.
pub fn repository_source(config: &AuditConfig) -> Result<RepositorySource> {
    if let Some(dynamic) = config.dynamic_repositories.as_ref().filter(|d| d.enabled) {
        return match dynamic.source {
            ListingService::Github => Ok(RepositorySource::DynamicGithub {
                organization: dynamic.organization.clone(),
                topic: dynamic.topic.clone(),
            }),
        };
    }

    match &config.repositories {
        Some(repositories) if !repositories.is_empty() => Ok(RepositorySource::Static {
            repositories: repositories.clone(),
        }),
        _ => Err(AuditError::configuration(
            "No repositories configured: set 'repositories' or enable 'dynamicRepositories'",
        )),
    }
}

/// Resolve the ordered list of repository identifiers
///
/// A static list is returned verbatim (duplicates are rejected when the
/// config is validated). A dynamic listing keeps the first occurrence of
/// each repository since search pages can overlap.
pub fn resolve_repositories(
    source: &RepositorySource,
    lister: &impl RepositoryLister,
) -> Result<Vec<String>> {
    match source {
        RepositorySource::Static { repositories } => {
            log::info!("Using {} configured repositories", repositories.len());
            Ok(repositories.clone())
        },
        RepositorySource::DynamicGithub {
            organization,
            topic,
        } => {
            let mut seen = HashSet::new();
            let mut repositories = lister.list_by_topic(organization, topic)?;
            repositories.retain(|r| seen.insert(r.clone()));
            if repositories.is_empty() {
                log::warn!("No repositories in {organization} carry topic '{topic}'");
            } else {
                log::info!(
                    "Found {} repositories in {organization} with topic '{topic}'",
                    repositories.len()
                );
            }
            Ok(repositories)
        },
    }
}
