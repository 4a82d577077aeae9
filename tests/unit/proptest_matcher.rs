//! Property-based tests for pattern evaluation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use regex::Regex;
use repo_audit::core::services::evaluate;

proptest! {
    /// Plain patterns agree with a direct regex search
    #[test]
    fn plain_pattern_is_regex_search(content in ".{0,64}", word in "[a-z]{1,4}") {
        let expected = Regex::new(&word).unwrap().is_match(&content);
        prop_assert_eq!(evaluate(&content, &word).unwrap(), expected);
    }

    /// "!X" is always the negation of "X"
    #[test]
    fn negation_is_symmetric(content in "[a-z \\n]{0,64}", word in "[a-z]{1,4}") {
        let plain = evaluate(&content, &word).unwrap();
        let negated = evaluate(&content, &format!("!{word}")).unwrap();
        prop_assert_eq!(negated, !plain);
    }

    /// Evaluating the same pair twice gives the same answer
    #[test]
    fn evaluation_is_idempotent(content in ".{0,64}", pattern in "!?[a-z.]{1,6}") {
        let first = evaluate(&content, &pattern).unwrap();
        let second = evaluate(&content, &pattern).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Content always contains itself when used as an escaped pattern
    #[test]
    fn escaped_content_matches_itself(content in ".{1,32}") {
        prop_assume!(!content.starts_with('!'));
        prop_assert!(evaluate(&content, &regex::escape(&content)).unwrap());
    }
}
