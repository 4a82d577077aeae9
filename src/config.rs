//! Audit configuration
//!
//! Loaded once at startup from a JSON file (or TOML when the path ends in
//! `.toml`). Keys are camelCase:
//!
//! ```json
//! {
//!   "repositories": ["acme/widgets"],
//!   "dynamicRepositories": {"enabled": false, "source": "github",
//!                           "organization": "acme", "topic": "audited"},
//!   "checks": [{"name": "has-license", "file": "LICENSE", "pattern": "MIT"}]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::Check;
use crate::error::{AuditError, Result};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "repo-audit.json";

/// Default report file name
pub const DEFAULT_REPORT_FILE: &str = "repo-audit-report.md";

/// Public GitHub raw content host
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Top-level audit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Static repository list (`owner/repo`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,

    /// Dynamic repository discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_repositories: Option<DynamicRepositories>,

    /// GitHub endpoints
    #[serde(default)]
    pub github: GithubEndpoints,

    /// Check catalog, in evaluation order
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Dynamic repository discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRepositories {
    /// Whether dynamic discovery replaces the static list
    pub enabled: bool,
    /// Listing service
    #[serde(default)]
    pub source: ListingService,
    /// Organization to search
    pub organization: String,
    /// Topic the repositories must carry
    pub topic: String,
}

/// Services that can list repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingService {
    /// GitHub repository search
    #[default]
    Github,
}

/// GitHub endpoint overrides (GitHub Enterprise, test servers)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubEndpoints {
    /// Raw file host
    #[serde(default = "default_raw_url")]
    pub raw_url: String,
    /// REST API base
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_raw_url() -> String {
    DEFAULT_RAW_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for GithubEndpoints {
    fn default() -> Self {
        Self {
            raw_url: default_raw_url(),
            api_url: default_api_url(),
        }
    }
}

impl AuditConfig {
    /// Load and validate config from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml(&content)?
        } else {
            Self::from_json(&content)?
        };

        log::debug!("Loaded {} checks from {}", config.checks.len(), path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the audit cannot run with
    ///
    /// Unknown `requires` targets are only warned about.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for repository in self.repositories.iter().flatten() {
            if !seen.insert(repository.as_str()) {
                return Err(AuditError::configuration(format!(
                    "Duplicate repository: {repository}"
                )));
            }
        }

        let mut names = HashSet::new();

        for check in &self.checks {
            if check.name.trim().is_empty() {
                return Err(AuditError::configuration("Check with empty name"));
            }
            if check.file.trim().is_empty() {
                return Err(AuditError::configuration(format!(
                    "Check '{}' has an empty file",
                    check.name
                )));
            }
            if check.pattern.is_empty() {
                return Err(AuditError::configuration(format!(
                    "Check '{}' has an empty pattern",
                    check.name
                )));
            }
            if !names.insert(check.name.as_str()) {
                return Err(AuditError::configuration(format!(
                    "Duplicate check name: {}",
                    check.name
                )));
            }
        }

        for check in &self.checks {
            for req in check.requires.iter().filter(|r| !names.contains(r.check.as_str())) {
                log::warn!("Check '{}' requires unknown check '{}'", check.name, req.check);
            }
        }

        Ok(())
    }

    /// Checks to run: all of them, or only the enabled check named `only`
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] if `only` names no enabled check.
    pub fn select_checks(&self, only: Option<&str>) -> Result<Vec<Check>> {
        let Some(name) = only else {
            return Ok(self.checks.clone());
        };

        self.checks
            .iter()
            .find(|c| c.enabled && c.name == name)
            .map(|c| vec![c.clone()])
            .ok_or_else(|| {
                let available: Vec<_> = self
                    .checks
                    .iter()
                    .filter(|c| c.enabled)
                    .map(|c| c.name.as_str())
                    .collect();
                AuditError::configuration(format!(
                    "Check not found: {name} (available: {})",
                    available.join(", ")
                ))
            })
    }
}
