//! Check service - runs checks across repositories
//!
//! Every failure is captured as a failed [`CheckResult`]; nothing here
//! aborts the run.

use crate::core::models::{Check, CheckResult, RepositoryId};
use crate::core::ports::RawFileSource;
use crate::core::services::fetcher::fetch_file;
use crate::core::services::matcher::evaluate;

/// Checks that are enabled and do not exclude `repository`, in input order
#[must_use]
pub fn applicable_checks<'a>(checks: &'a [Check], repository: &str) -> Vec<&'a Check> {
    checks
        .iter()
        .filter(|check| {
            let applies = check.applies_to(repository);
            if !applies {
                log::debug!("Skipping {} for {repository}", check.name);
            }
            applies
        })
        .collect()
}

/// Evaluate all applicable checks against one repository
///
/// A malformed identifier fails every applicable check with the
/// identifier error and makes no requests.
pub fn audit_repository(
    source: &impl RawFileSource,
    repository: &str,
    checks: &[Check],
) -> Vec<CheckResult> {
    let applicable = applicable_checks(checks, repository);

    let id = match RepositoryId::parse(repository) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{e}");
            let message = e.to_string();
            return applicable
                .into_iter()
                .map(|check| CheckResult::errored(repository, &check.name, &check.file, &message))
                .collect();
        },
    };

    applicable
        .into_iter()
        .map(|check| run_check(source, &id, repository, check))
        .collect()
}

/// Evaluate every repository in order
///
/// Results are ordered by repository, then by check.
pub fn run_audit(
    source: &impl RawFileSource,
    repositories: &[String],
    checks: &[Check],
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for (index, repository) in repositories.iter().enumerate() {
        log::info!("[{}/{}] Auditing {repository}", index + 1, repositories.len());
        results.extend(audit_repository(source, repository, checks));
    }

    results
}

fn run_check(
    source: &impl RawFileSource,
    id: &RepositoryId,
    repository: &str,
    check: &Check,
) -> CheckResult {
    let outcome = fetch_file(source, id, &check.file)
        .and_then(|content| evaluate(&content, &check.pattern));

    match outcome {
        Ok(passed) => {
            log::debug!("{repository}: {} {}", check.name, if passed { "passed" } else { "failed" });
            CheckResult::evaluated(repository, &check.name, &check.file, passed)
        },
        Err(e) => {
            log::debug!("{repository}: {} errored: {e}", check.name);
            CheckResult::errored(repository, &check.name, &check.file, e.to_string())
        },
    }
}
