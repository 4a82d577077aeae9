//! Markdown report document

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{blob_url, failure_label, prerequisite_label, repository_url, success_message};
use crate::core::services::AuditReport;

/// Report title
pub const REPORT_TITLE: &str = "# Repository Audit Report";

/// Render the grouped report as a markdown document
#[must_use]
pub fn render_markdown(report: &AuditReport, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    writeln!(out, "{REPORT_TITLE}\n").ok();
    writeln!(
        out,
        "_Generated: {}_\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
    .ok();

    if report.all_passed() {
        writeln!(out, "{}", success_message(report)).ok();
        return out;
    }

    writeln!(out, "| Status | Count |").ok();
    writeln!(out, "|--------|------:|").ok();
    writeln!(out, "| ✅ Passed | {} |", report.passed).ok();
    writeln!(out, "| ❌ Failed | {} |", report.failed).ok();
    writeln!(out, "| Total | {} |", report.total).ok();

    for group in &report.checks {
        writeln!(out, "\n## `{}` ({} failed)\n", group.check, group.failure_count()).ok();
        if let Some(description) = &group.description {
            writeln!(out, "> {description}\n").ok();
        }

        writeln!(out, "| Repository | File | Problem | Fix first |").ok();
        writeln!(out, "|------------|------|---------|-----------|").ok();
        for repo in &group.repositories {
            for failure in &repo.failures {
                let fix_first = failure
                    .prerequisites
                    .iter()
                    .map(prerequisite_label)
                    .collect::<Vec<_>>()
                    .join("<br>");
                writeln!(
                    out,
                    "| [{repo_name}]({repo_link}) | [{file}]({file_link}) | {problem} | {fix_first} |",
                    repo_name = repo.repository,
                    repo_link = repository_url(&repo.repository),
                    file = failure.file_path,
                    file_link = blob_url(&failure.repository, &failure.file_path),
                    problem = escape_cell(&failure_label(&failure.kind)),
                )
                .ok();
            }
        }
    }

    out
}

/// Keep table cells on one row
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
