//! Tests for the Check and RepositoryId models

use repo_audit::core::models::{Check, RepositoryId};

use crate::common::CheckBuilder;

mod applies_to {
    use super::*;

    #[test]
    fn enabled_check_applies_everywhere() {
        let check = CheckBuilder::new("a").build();
        assert!(check.applies_to("acme/widgets"));
        assert!(check.applies_to("anything at all"));
    }

    #[test]
    fn disabled_check_applies_nowhere() {
        let check = CheckBuilder::new("a").disabled().build();
        assert!(!check.applies_to("acme/widgets"));
    }

    #[test]
    fn exclusion_is_exact_match() {
        let check = CheckBuilder::new("a").exclude("acme/widgets").build();
        assert!(!check.applies_to("acme/widgets"));
        assert!(check.applies_to("acme/widgets-2"));
        assert!(check.applies_to("ACME/widgets"));
    }
}

mod serde_shape {
    use super::*;

    #[test]
    fn camel_case_round_trip_keeps_optional_fields_out() {
        let check = Check::new("has-license", "LICENSE", "MIT");
        let json = serde_json::to_string(&check).unwrap();
        assert_eq!(
            json,
            r#"{"name":"has-license","file":"LICENSE","pattern":"MIT","enabled":true}"#
        );
    }

    #[test]
    fn full_check_deserializes() {
        let check: Check = serde_json::from_str(
            r#"{
                "name": "ci",
                "file": ".github/workflows/ci.yml",
                "pattern": "cargo test",
                "description": "CI runs the tests",
                "enabled": false,
                "requires": [{"check": "has-ci"}],
                "exclude": [{"repository": "acme/docs", "reason": "no code"}]
            }"#,
        )
        .unwrap();

        assert_eq!(check.description.as_deref(), Some("CI runs the tests"));
        assert!(!check.enabled);
        assert_eq!(check.requires[0].check, "has-ci");
        assert!(check.requires[0].reason.is_none());
        assert_eq!(check.exclude[0].reason.as_deref(), Some("no code"));
    }
}

mod repository_id {
    use super::*;

    #[test]
    fn from_str_parses() {
        let id: RepositoryId = "acme/widgets".parse().unwrap();
        assert_eq!((id.owner(), id.name()), ("acme", "widgets"));
    }

    #[test]
    fn error_message_names_format() {
        let err = "widgets".parse::<RepositoryId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid repository identifier 'widgets': expected 'owner/repo'"
        );
    }
}
