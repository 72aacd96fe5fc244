use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::Severity;

/// Kind of skip-logic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Every check variable must be present and non-missing. Unconditional.
    Critical,
    /// When the condition matches, every check variable must be non-missing.
    Missing,
    /// Every check variable must hold one of the accepted values.
    Value,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Critical => "critical",
            CheckKind::Missing => "missing",
            CheckKind::Value => "value",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(CheckKind::Critical),
            "missing" => Ok(CheckKind::Missing),
            "value" => Ok(CheckKind::Value),
            _ => Err(format!("Unknown check type: {s}")),
        }
    }
}

/// Triggering condition of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCondition {
    pub variable: String,
    /// Accepted alternatives, compared as trimmed strings.
    pub values: Vec<String>,
}

/// A declarative rule from the skip-logic table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipLogicRule {
    /// Variant class name the rule applies to (exact match).
    pub class: String,
    pub condition: Option<RuleCondition>,
    pub check: CheckKind,
    pub check_variables: Vec<String>,
    pub check_values: Vec<String>,
    pub severity: Severity,
}

impl SkipLogicRule {
    /// Check variables joined for messages.
    pub fn joined_variables(&self) -> String {
        self.check_variables.join(", ")
    }
}

/// Splits a comma-separated rule-table cell, dropping empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(split_list(" 1, 2 ,,3"), vec!["1", "2", "3"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn check_kind_is_case_insensitive() {
        assert_eq!("Value".parse::<CheckKind>(), Ok(CheckKind::Value));
        assert!("range".parse::<CheckKind>().is_err());
    }
}
