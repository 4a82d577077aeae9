//! Pattern matcher service - tests check patterns against file content
//!
//! This module contains pure matching logic with no I/O dependencies.

use regex::Regex;

use crate::error::{AuditError, Result};

/// A compiled check pattern
///
/// Supports two forms:
/// - `regex` - passes when the regex is found anywhere in the content
/// - `!regex` - passes when the regex is found nowhere in the content
///
/// No flags are implied; inline flags such as `(?i)` or `(?m)` work as
/// part of the regex syntax.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    negated: bool,
}

impl Pattern {
    /// Compile a check pattern
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Pattern`] if the regex (after stripping a
    /// leading `!`) is malformed.
    pub fn compile(pattern: &str) -> Result<Self> {
        let (negated, expr) = pattern.strip_prefix('!').map_or((false, pattern), |rest| (true, rest));

        let regex = Regex::new(expr).map_err(|source| AuditError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex, negated })
    }

    /// Whether the pattern was written with a leading `!`
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Test the pattern against the whole content
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.regex.is_match(content) != self.negated
    }
}

/// Compile `pattern` and test it against `content`
///
/// # Errors
///
/// Returns [`AuditError::Pattern`] if the pattern is malformed.
pub fn evaluate(content: &str, pattern: &str) -> Result<bool> {
    Ok(Pattern::compile(pattern)?.matches(content))
}
