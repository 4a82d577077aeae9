//! Tests for the output module
//!
//! Rendering is pure, so these tests only compare strings.

use chrono::{TimeZone, Utc};
use repo_audit::core::models::CheckResult;
use repo_audit::output::{REPORT_TITLE, render};
use serial_test::serial;

use crate::common::CheckBuilder;

fn rendered(results: &[CheckResult]) -> repo_audit::output::RenderedReport {
    let checks = vec![
        CheckBuilder::new("A").file("LICENSE").build(),
        CheckBuilder::new("B").requires("A", Some("needs base config")).build(),
    ];
    colored::control::set_override(false);
    let out = render(results, &checks, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
    colored::control::unset_override();
    out
}

#[test]
#[serial]
fn zero_failures_short_circuits_both_outputs() {
    let out = rendered(&[
        CheckResult::evaluated("r/r", "A", "LICENSE", true),
        CheckResult::evaluated("r/r", "B", "README.md", true),
    ]);

    assert_eq!(out.console.trim(), "✅ All checks passed (2 results)");
    assert_eq!(
        out.document,
        format!("{REPORT_TITLE}\n\n_Generated: 2026-01-02T03:04:05Z_\n\n✅ All checks passed (2 results)\n")
    );
}

#[test]
#[serial]
fn dependent_failure_references_prerequisite() {
    let out = rendered(&[
        CheckResult::evaluated("r/r", "A", "LICENSE", false),
        CheckResult::evaluated("r/r", "B", "README.md", false),
    ]);

    assert!(out.console.contains("fix first: `A` (needs base config)"));
    assert!(out.document.contains("fix first: `A` (needs base config)"));
}

#[test]
#[serial]
fn prerequisite_in_other_repository_is_ignored() {
    let out = rendered(&[
        CheckResult::evaluated("r/r", "A", "LICENSE", false),
        CheckResult::evaluated("s/s", "B", "README.md", false),
    ]);

    assert!(!out.console.contains("fix first"));
    assert!(!out.document.contains("fix first"));
}

#[test]
#[serial]
fn empty_result_set_is_success() {
    let out = rendered(&[]);
    assert!(out.console.contains("All checks passed (0 results)"));
    assert!(!out.document.contains('|'));
}

#[test]
#[serial]
fn rendered_report_carries_grouped_summary() {
    let out = rendered(&[
        CheckResult::evaluated("r/r", "A", "LICENSE", true),
        CheckResult::evaluated("r/r", "B", "README.md", false),
    ]);

    assert!(!out.report.all_passed());
    assert_eq!((out.report.total, out.report.passed, out.report.failed), (2, 1, 1));
    assert_eq!(out.report.checks.len(), 1);
    assert_eq!(out.report.checks[0].check, "B");
}
