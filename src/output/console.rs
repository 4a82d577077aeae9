//! Console summary

use std::fmt::Write;

use colored::Colorize;

use super::{blob_url, failure_label, prerequisite_label, success_message};
use crate::core::services::AuditReport;

/// Render the grouped report for the terminal
#[must_use]
pub fn render_console(report: &AuditReport) -> String {
    if report.all_passed() {
        return format!("{}\n", success_message(report).green().bold());
    }

    let mut out = String::new();
    writeln!(
        out,
        "Audit complete: {} passed, {} failed ({} total)\n",
        report.passed.to_string().green(),
        report.failed.to_string().red(),
        report.total
    )
    .ok();

    for group in &report.checks {
        writeln!(out, "{} {} ({})", "✗".red(), group.check.bold(), group.failure_count()).ok();
        if let Some(description) = &group.description {
            writeln!(out, "  {}", description.dimmed()).ok();
        }

        for repo in &group.repositories {
            writeln!(out, "  {}", repo.repository.cyan()).ok();
            for failure in &repo.failures {
                writeln!(
                    out,
                    "    {} → {}",
                    failure_label(&failure.kind),
                    blob_url(&failure.repository, &failure.file_path).underline()
                )
                .ok();
                for prerequisite in &failure.prerequisites {
                    writeln!(out, "      ↳ {}", prerequisite_label(prerequisite).yellow()).ok();
                }
            }
        }
        writeln!(out).ok();
    }

    out
}
