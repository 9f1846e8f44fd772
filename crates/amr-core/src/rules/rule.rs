//! Redirect rule type and construction-time validation.

use regex::Regex;
use thiserror::Error;

/// Error building a redirect rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The pattern is not a valid regular expression.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The pattern compiled but does not define the `filename` capture group,
    /// so it could never produce a redirect.
    #[error("rule pattern has no `filename` capture group: {0}")]
    MissingFilenameGroup(String),
}

/// One redirect rule: URLs matching `pattern` are rewritten to `target_base`
/// plus the captured `filename`.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    pub pattern: Regex,
    /// Base URL prefix the captured filename is appended to.
    pub target_base: String,
    /// Strip the per-variant suffix from the captured filename (text after
    /// the first hyphen, keeping the extension) before building the target.
    pub special_naming: bool,
}

impl RedirectRule {
    /// Compile a rule. The pattern must define a `filename` named capture group.
    pub fn new(pattern: &str, target_base: impl Into<String>) -> Result<Self, RuleError> {
        Self::build(pattern, target_base, false)
    }

    /// Compile a rule whose captured filename gets the variant-suffix strip.
    pub fn with_special_naming(
        pattern: &str,
        target_base: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Self::build(pattern, target_base, true)
    }

    fn build(
        pattern: &str,
        target_base: impl Into<String>,
        special_naming: bool,
    ) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern)?;
        if !regex.capture_names().flatten().any(|name| name == "filename") {
            return Err(RuleError::MissingFilenameGroup(pattern.to_string()));
        }
        Ok(Self {
            pattern: regex,
            target_base: target_base.into(),
            special_naming,
        })
    }
}
