//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands::{self, AuditOptions};
use repo_audit::config::{DEFAULT_CONFIG_FILE, DEFAULT_REPORT_FILE};
use repo_audit::output::OutputMode;

/// repo-audit - Audit repositories against file-content rules
#[derive(Parser, Debug)]
#[command(
    name = "repo-audit",
    version,
    about = "Audit repositories against file-content rules",
    long_about = "Fetch one file per check from every configured repository and test it \
                  against a regex.\n\n\
                  Patterns prefixed with '!' must NOT match. Failures are grouped by check \
                  and repository and written to a markdown report."
)]
pub struct Cli {
    /// Run only the check with this name
    pub check: Option<String>,

    /// Path to the JSON (or .toml) configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Where to write the markdown report
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    pub report: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
///
/// Returns whether every evaluated check passed.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::audit(&AuditOptions {
        config: cli.config,
        report: cli.report,
        check: cli.check,
        mode,
    })
}
