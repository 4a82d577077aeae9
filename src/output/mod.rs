//! Output formatting for console, markdown and JSON
//!
//! Rendering is pure: [`render`] returns strings and the caller decides
//! what to print or write.

mod console;
mod markdown;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{Check, CheckResult};
use crate::core::services::{AuditReport, FailureKind, PRIMARY_BRANCH, Prerequisite};

pub use console::render_console;
pub use markdown::{REPORT_TITLE, render_markdown};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Grouped report with its console text and report document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Grouped failures and counts
    pub report: AuditReport,
    /// Human-readable summary for the terminal
    pub console: String,
    /// Markdown document for the report file
    pub document: String,
}

/// Machine-readable audit output for `--json`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Whether every result passed
    pub passed: bool,
    /// Report generation time (RFC 3339)
    pub generated_at: String,
    /// Grouped failures and counts
    pub summary: &'a AuditReport,
    /// Every result in evaluation order
    pub results: &'a [CheckResult],
}

impl JsonOutput<'_> {
    /// Serialize as pretty JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Render both the console summary and the markdown report
#[must_use]
pub fn render(results: &[CheckResult], checks: &[Check], generated_at: DateTime<Utc>) -> RenderedReport {
    let report = AuditReport::build(results, checks);
    RenderedReport {
        console: render_console(&report),
        document: render_markdown(&report, generated_at),
        report,
    }
}

/// Browser link to a file on the primary branch
#[must_use]
pub fn blob_url(repository: &str, file_path: &str) -> String {
    format!(
        "https://github.com/{repository}/blob/{PRIMARY_BRANCH}/{}",
        file_path.trim_start_matches('/')
    )
}

/// Browser link to a repository
#[must_use]
pub fn repository_url(repository: &str) -> String {
    format!("https://github.com/{repository}")
}

fn failure_label(kind: &FailureKind) -> String {
    match kind {
        FailureKind::FileNotFound => "📄 File not found".to_string(),
        FailureKind::Error(message) => format!("⚠️ {message}"),
        FailureKind::PatternNotFound => "❌ Pattern not found".to_string(),
    }
}

fn prerequisite_label(prerequisite: &Prerequisite) -> String {
    match &prerequisite.reason {
        Some(reason) => format!("fix first: `{}` ({reason})", prerequisite.check),
        None => format!("fix first: `{}`", prerequisite.check),
    }
}

fn success_message(report: &AuditReport) -> String {
    format!("✅ All checks passed ({} results)", report.total)
}
