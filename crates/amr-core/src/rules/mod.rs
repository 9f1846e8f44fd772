//! Ordered redirect rules and exclusion matching.
//!
//! The table is built once at startup and immutable thereafter. Rule order
//! encodes priority: the first matching rule wins and later rules are never
//! consulted, even when the winner yields no usable filename.

mod defaults;
mod rule;

pub use defaults::default_rule_table;
pub use rule::{RedirectRule, RuleError};

use regex::Regex;

/// Outcome of a rule walk: the winning rule and the filename it captured.
/// `filename` is None when the group did not participate in the match or
/// captured an empty string.
#[derive(Debug)]
pub struct RuleMatch<'a> {
    pub rule: &'a RedirectRule,
    pub filename: Option<String>,
}

/// Immutable ordered redirect rules plus an exclusion list.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RedirectRule>,
    exclusions: Vec<Regex>,
}

impl RuleTable {
    pub fn new(rules: Vec<RedirectRule>, exclusions: Vec<Regex>) -> Self {
        Self { rules, exclusions }
    }

    /// True if the URL matches any exclusion rule. Exclusions are checked
    /// independently of (and by the resolver, before) the redirect rules.
    pub fn is_excluded(&self, url: &str) -> bool {
        self.exclusions.iter().any(|re| re.is_match(url))
    }

    /// Walk the rules in priority order and return the first match.
    pub fn find_match(&self, url: &str) -> Option<RuleMatch<'_>> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(url) {
                let filename = caps
                    .name("filename")
                    .map(|m| m.as_str().to_string())
                    .filter(|name| !name.is_empty());
                return Some(RuleMatch { rule, filename });
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
