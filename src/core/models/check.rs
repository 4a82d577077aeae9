//! Check model
//!
//! A check declares: "this file in every audited repository must match this
//! pattern". A leading `!` on the pattern inverts the test.

use serde::{Deserialize, Serialize};

/// A file-content rule applied to every audited repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    /// Unique name within a run
    pub name: String,

    /// Repository-relative path of the file to inspect (e.g. "LICENSE")
    pub file: String,

    /// Regex searched anywhere in the file; `!` prefix negates the result
    pub pattern: String,

    /// Human-readable description shown in the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Disabled checks are never evaluated
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Checks that should be fixed before this one (advisory only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,

    /// Repositories this check is skipped for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<Exclusion>,
}

/// A "fix this first" link to another check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Name of the required check
    pub check: String,

    /// Why the required check comes first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A repository excluded from a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Repository identifier as written in the configuration
    pub repository: String,

    /// Why the repository is excluded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

const fn default_enabled() -> bool {
    true
}

impl Check {
    /// Create an enabled check with no requirements or exclusions
    pub fn new(name: impl Into<String>, file: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            pattern: pattern.into(),
            description: None,
            enabled: true,
            requires: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Whether this check is evaluated for the given repository
    ///
    /// Disabled checks apply nowhere; excluded repositories are compared
    /// by exact identifier.
    #[must_use]
    pub fn applies_to(&self, repository: &str) -> bool {
        self.enabled && !self.excludes(repository)
    }

    /// Whether the repository is listed in this check's exclude set
    #[must_use]
    pub fn excludes(&self, repository: &str) -> bool {
        self.exclude.iter().any(|e| e.repository == repository)
    }
}
