//! Report service - groups failures for display
//!
//! Builds an [`AuditReport`] from a completed, immutable result list. The
//! `requires` relation is resolved with a plain `(check, repository)` index;
//! it only annotates failures and never affects which checks ran.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::core::models::{Check, CheckResult};

/// Why a check failed, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FailureKind {
    /// The file exists on neither branch
    FileNotFound,
    /// Fetch, identifier or pattern error, shown verbatim
    Error(String),
    /// The file was read but the pattern test did not pass
    PatternNotFound,
}

impl FailureKind {
    /// Classify a failed result
    #[must_use]
    pub fn classify(result: &CheckResult) -> Self {
        match &result.error {
            None => Self::PatternNotFound,
            Some(_) if result.is_file_not_found() => Self::FileNotFound,
            Some(message) => Self::Error(message.clone()),
        }
    }
}

/// A required check that also failed for the same repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prerequisite {
    /// Name of the required check
    pub check: String,
    /// Reason given in the `requires` entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One failed (repository, check) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Repository identifier
    pub repository: String,
    /// Check name
    pub check: String,
    /// File the check inspected
    pub file_path: String,
    /// Failure classification
    pub kind: FailureKind,
    /// Failed prerequisites to fix first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<Prerequisite>,
}

/// Failures of one check within one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryFailures {
    /// Repository identifier
    pub repository: String,
    /// Failures in evaluation order
    pub failures: Vec<Failure>,
}

/// All failures of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailures {
    /// Check name
    pub check: String,
    /// Check description, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Failures grouped by repository, alphabetical
    pub repositories: Vec<RepositoryFailures>,
}

impl CheckFailures {
    /// Number of failures across all repositories
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.repositories.iter().map(|r| r.failures.len()).sum()
    }
}

/// Grouped view of a completed audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Number of results
    pub total: usize,
    /// Number of passed results
    pub passed: usize,
    /// Number of failed results
    pub failed: usize,
    /// Failures grouped by check, alphabetical
    pub checks: Vec<CheckFailures>,
}

impl AuditReport {
    /// Group results for display
    ///
    /// `checks` supplies descriptions and `requires` links; results for
    /// checks missing from it are still reported, just without annotations.
    #[must_use]
    pub fn build(results: &[CheckResult], checks: &[Check]) -> Self {
        let by_name: HashMap<&str, &Check> = checks.iter().map(|c| (c.name.as_str(), c)).collect();
        let index: HashMap<(&str, &str), &CheckResult> = results
            .iter()
            .map(|r| ((r.check.as_str(), r.repository.as_str()), r))
            .collect();

        let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<Failure>>> = BTreeMap::new();
        for result in results.iter().filter(|r| !r.passed) {
            let prerequisites = by_name
                .get(result.check.as_str())
                .map(|check| failed_prerequisites(check, &result.repository, &index))
                .unwrap_or_default();

            grouped
                .entry(result.check.as_str())
                .or_default()
                .entry(result.repository.as_str())
                .or_default()
                .push(Failure {
                    repository: result.repository.clone(),
                    check: result.check.clone(),
                    file_path: result.file_path.clone(),
                    kind: FailureKind::classify(result),
                    prerequisites,
                });
        }

        let groups = grouped
            .into_iter()
            .map(|(check, repositories)| CheckFailures {
                check: check.to_string(),
                description: by_name.get(check).and_then(|c| c.description.clone()),
                repositories: repositories
                    .into_iter()
                    .map(|(repository, failures)| RepositoryFailures {
                        repository: repository.to_string(),
                        failures,
                    })
                    .collect(),
            })
            .collect();

        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            checks: groups,
        }
    }

    /// Whether there were no failures
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn failed_prerequisites(
    check: &Check,
    repository: &str,
    index: &HashMap<(&str, &str), &CheckResult>,
) -> Vec<Prerequisite> {
    check
        .requires
        .iter()
        .filter(|req| {
            index
                .get(&(req.check.as_str(), repository))
                .is_some_and(|r| !r.passed)
        })
        .map(|req| Prerequisite {
            check: req.check.clone(),
            reason: req.reason.clone(),
        })
        .collect()
}
