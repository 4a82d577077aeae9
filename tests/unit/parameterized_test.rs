//! Parameterized tests using test-case

use repo_audit::core::models::RepositoryId;
use repo_audit::core::services::evaluate;
use test_case::test_case;

// =============================================================================
// Pattern Evaluation
// =============================================================================

#[test_case("MIT License", "MIT", true ; "plain match")]
#[test_case("Apache License", "MIT", false ; "plain miss")]
#[test_case("no todos here", "!TODO", true ; "negated miss passes")]
#[test_case("// TODO: fix", "!TODO", false ; "negated match fails")]
#[test_case("edition = \"2021\"", r#"edition\s*=\s*"20(21|24)""#, true ; "regex alternation")]
#[test_case("a\nb", "a.b", false ; "dot does not cross newline")]
#[test_case("a\nb", "(?s)a.b", true ; "inline dotall flag")]
#[test_case("README", "^READ", true ; "anchor at content start")]
#[test_case("x\nREADME", "^READ", false ; "anchor is not per line")]
#[test_case("", "!anything", true ; "empty content negated")]
fn test_evaluate(content: &str, pattern: &str, expected: bool) {
    assert_eq!(evaluate(content, pattern).unwrap(), expected);
}

#[test_case("(" ; "open group")]
#[test_case("![" ; "negated open class")]
#[test_case("a{2,1}" ; "bad repetition")]
fn test_malformed_pattern(pattern: &str) {
    let err = evaluate("content", pattern).unwrap_err();
    assert!(err.to_string().starts_with(&format!("Invalid pattern '{pattern}'")));
}

// =============================================================================
// Repository Identifiers
// =============================================================================

#[test_case("acme/widgets", true ; "owner and repo")]
#[test_case("acme-inc/widgets.rs", true ; "punctuation allowed")]
#[test_case("acme", false ; "no slash")]
#[test_case("acme/", false ; "empty repo")]
#[test_case("/widgets", false ; "empty owner")]
#[test_case("acme/widgets/extra", false ; "too many segments")]
#[test_case("", false ; "empty string")]
fn test_repository_id(input: &str, valid: bool) {
    assert_eq!(RepositoryId::parse(input).is_ok(), valid);
}
