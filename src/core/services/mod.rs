//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Network access goes through the port traits; everything else is
//! computed from data passed in.
//!
//! - [`fetcher`] - Fetch a file with branch fallback
//! - [`matcher`] - Evaluate (optionally negated) patterns against content
//! - [`checker`] - Run checks across repositories
//! - [`resolver`] - Resolve the repository list
//! - [`report`] - Group failures and annotate prerequisites

pub mod checker;
pub mod fetcher;
pub mod matcher;
pub mod report;
pub mod resolver;

pub use checker::{applicable_checks, audit_repository, run_audit};
pub use fetcher::{FALLBACK_BRANCH, PRIMARY_BRANCH, fetch_file};
pub use matcher::{Pattern, evaluate};
pub use report::{AuditReport, CheckFailures, Failure, FailureKind, Prerequisite, RepositoryFailures};
pub use resolver::{repository_source, resolve_repositories};
