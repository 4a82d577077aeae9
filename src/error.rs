//! Error types for repository auditing
//!
//! Per-check failures ([`AuditError::NotFound`], [`AuditError::Fetch`],
//! [`AuditError::Pattern`], [`AuditError::InvalidRepositoryIdentifier`]) are
//! captured as failed check results. Configuration-level failures abort the
//! run before any check is evaluated.

use std::path::PathBuf;

use thiserror::Error;

/// Prefix of the message carried by [`AuditError::NotFound`]
///
/// The reporter uses it to tell missing files apart from other failures.
pub const NOT_FOUND_PREFIX: &str = "File not found";

/// Errors that can occur while auditing repositories
#[derive(Debug, Error)]
pub enum AuditError {
    /// Repository identifier is not of the form `owner/repo`
    #[error("Invalid repository identifier '{0}': expected 'owner/repo'")]
    InvalidRepositoryIdentifier(String),

    /// Neither the primary nor the fallback branch served the file
    #[error("File not found: {path}")]
    NotFound {
        /// Repository-relative file path
        path: String,
    },

    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Transport error message
        message: String,
    },

    /// Check pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as written in the check (including any `!`)
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration is unusable (no repositories, unknown check, bad fields)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to read or write a file
    #[error("Failed to access {path}: {source}")]
    Io {
        /// Path that was accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON config could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AuditError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error means the file was missing on both branches
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AuditError>;
