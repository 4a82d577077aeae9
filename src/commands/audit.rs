//! Audit command - resolve, fetch, check, report

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};

use repo_audit::adapters::GithubClient;
use repo_audit::config::AuditConfig;
use repo_audit::core::services::{repository_source, resolve_repositories, run_audit};
use repo_audit::output::{JsonOutput, OutputMode, render};

/// Options for a single audit run
#[derive(Debug)]
pub struct AuditOptions {
    /// Configuration file
    pub config: PathBuf,
    /// Report destination
    pub report: PathBuf,
    /// Run only this check
    pub check: Option<String>,
    /// Console output mode
    pub mode: OutputMode,
}

/// Run the audit and write the report
///
/// Configuration problems fail before any check runs. Returns whether
/// every evaluated check passed.
pub fn audit(options: &AuditOptions) -> anyhow::Result<bool> {
    let config = AuditConfig::load(&options.config)
        .with_context(|| format!("Failed to load {}", options.config.display()))?;
    let checks = config.select_checks(options.check.as_deref())?;
    let source = repository_source(&config)?;

    let client = GithubClient::from_env(config.github.clone())?;
    let repositories = resolve_repositories(&source, &client)?;

    let results = run_audit(&client, &repositories, &checks);

    let generated_at = Utc::now();
    let rendered = render(&results, &config.checks, generated_at);

    fs::write(&options.report, &rendered.document)
        .with_context(|| format!("Failed to write report to {}", options.report.display()))?;

    match options.mode {
        OutputMode::Human => {
            print!("{}", rendered.console);
            println!("Report written to {}", options.report.display());
        },
        OutputMode::Json => {
            log::info!("Report written to {}", options.report.display());
            let output = JsonOutput {
                passed: rendered.report.all_passed(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                summary: &rendered.report,
                results: &results,
            };
            println!("{}", output.to_json());
        },
    }

    Ok(rendered.report.all_passed())
}
