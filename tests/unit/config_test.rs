//! Tests for configuration loading and check selection

use std::fs;

use repo_audit::AuditError;
use repo_audit::config::{AuditConfig, DEFAULT_API_URL};
use repo_audit::core::models::RepositorySource;
use repo_audit::core::services::repository_source;
use tempfile::TempDir;

const JSON_CONFIG: &str = r##"{
    "repositories": ["acme/widgets"],
    "github": {"rawUrl": "http://127.0.0.1:8080"},
    "checks": [
        {"name": "has-license", "file": "LICENSE", "pattern": "MIT"},
        {"name": "has-readme", "file": "README.md", "pattern": "#",
         "requires": [{"check": "missing-check"}]}
    ]
}"##;

#[test]
fn load_json_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("repo-audit.json");
    fs::write(&path, JSON_CONFIG).unwrap();

    let config = AuditConfig::load(&path).unwrap();

    assert_eq!(config.checks.len(), 2);
    assert_eq!(config.github.raw_url, "http://127.0.0.1:8080");
    assert_eq!(config.github.api_url, DEFAULT_API_URL);
}

#[test]
fn load_toml_by_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    fs::write(
        &path,
        r#"
repositories = ["acme/widgets"]

[[checks]]
name = "has-license"
file = "LICENSE"
pattern = "MIT"

[[checks.exclude]]
repository = "acme/legacy"
reason = "archived"
"#,
    )
    .unwrap();

    let config = AuditConfig::load(&path).unwrap();

    assert_eq!(config.checks[0].exclude[0].repository, "acme/legacy");
}

#[test]
fn load_rejects_malformed_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("repo-audit.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(AuditConfig::load(&path).unwrap_err(), AuditError::Json(_)));
}

#[test]
fn unknown_requirement_is_not_fatal() {
    assert!(AuditConfig::from_json(JSON_CONFIG).is_ok());
}

#[test]
fn static_source_from_config() {
    let config = AuditConfig::from_json(JSON_CONFIG).unwrap();
    assert_eq!(
        repository_source(&config).unwrap(),
        RepositorySource::Static {
            repositories: vec!["acme/widgets".to_string()],
        }
    );
}

#[test]
fn no_repositories_is_configuration_error() {
    let config = AuditConfig::from_json(r#"{"checks": []}"#).unwrap();
    let err = repository_source(&config).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: No repositories configured"));
}

#[test]
fn dynamic_requires_organization_and_topic() {
    let err = AuditConfig::from_json(r#"{"dynamicRepositories": {"enabled": true}}"#).unwrap_err();
    assert!(matches!(err, AuditError::Json(_)));
}
