//! Repository identifier
//!
//! Parses and validates `owner/repo` strings.

use std::fmt;
use std::str::FromStr;

use crate::error::AuditError;

/// A validated `owner/repo` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Parse an `owner/repo` string
    ///
    /// The input is split on the first `/`; both halves must be non-empty
    /// and the repository half may not contain another `/`.
    pub fn parse(input: &str) -> Result<Self, AuditError> {
        let invalid = || AuditError::InvalidRepositoryIdentifier(input.to_string());

        let (owner, name) = input.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Repository owner (user or organization)
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositoryId {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
