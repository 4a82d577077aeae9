//! Check result model

use serde::Serialize;

use crate::error::NOT_FOUND_PREFIX;

/// Outcome of evaluating one check against one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Repository identifier as configured or resolved
    pub repository: String,
    /// Name of the evaluated check
    pub check: String,
    /// Repository-relative file the check inspected
    pub file_path: String,
    /// Whether the check passed
    pub passed: bool,
    /// Failure message when fetching, parsing or pattern compilation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// A result whose pattern test ran to completion
    pub fn evaluated(
        repository: impl Into<String>,
        check: impl Into<String>,
        file_path: impl Into<String>,
        passed: bool,
    ) -> Self {
        Self {
            repository: repository.into(),
            check: check.into(),
            file_path: file_path.into(),
            passed,
            error: None,
        }
    }

    /// A failed result carrying an error message
    pub fn errored(
        repository: impl Into<String>,
        check: impl Into<String>,
        file_path: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            check: check.into(),
            file_path: file_path.into(),
            passed: false,
            error: Some(error.into()),
        }
    }

    /// Whether the failure was a missing file
    #[must_use]
    pub fn is_file_not_found(&self) -> bool {
        self.error.as_deref().is_some_and(|e| e.starts_with(NOT_FOUND_PREFIX))
    }
}
