use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordinal severity of a record: `None < NonCritical < Critical`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Non-Critical")]
    NonCritical,
    #[serde(rename = "Critical")]
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::NonCritical => "Non-Critical",
            Severity::Critical => "Critical",
        }
    }

    /// Reduces per-severity counters to the worst label.
    ///
    /// Any critical violation wins regardless of how many non-critical ones
    /// were recorded.
    pub fn aggregate(counts: SeverityCounts) -> Self {
        if counts.critical > 0 {
            Severity::Critical
        } else if counts.non_critical > 0 {
            Severity::NonCritical
        } else {
            Severity::None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Accepts the three labels plus `Low`, which maps to `Non-Critical`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "none" => Ok(Severity::None),
            "non-critical" | "noncritical" | "low" => Ok(Severity::NonCritical),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Violation counters per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub non_critical: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::NonCritical => self.non_critical += 1,
            Severity::None => {}
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.non_critical
    }
}

/// Where a violation came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSource {
    /// A free-numeric field was rewritten during coercion.
    Coercion,
    /// A hardcoded structural invariant.
    Invariant,
    /// A rule-table entry: class name and position within that class.
    Rule { class: String, index: usize },
}

/// One recorded violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Offending field names.
    pub fields: Vec<String>,
    pub severity: Severity,
    pub source: ViolationSource,
    /// Human-readable message, ending with the severity label in parentheses.
    pub message: String,
}

impl Violation {
    pub fn new(
        fields: Vec<String>,
        severity: Severity,
        source: ViolationSource,
        detail: impl fmt::Display,
    ) -> Self {
        let message = format!("{detail} ({severity})");
        Self {
            fields,
            severity,
            source,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation outcome attached to one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
    pub severity: Severity,
    pub num_errors: usize,
}

impl ValidationResult {
    /// Builds a result whose count and severity are derived from `violations`.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let counts = Self::count(&violations);
        Self {
            num_errors: violations.len(),
            severity: Severity::aggregate(counts),
            violations,
        }
    }

    pub fn count(violations: &[Violation]) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for violation in violations {
            counts.record(violation.severity);
        }
        counts
    }

    pub fn counts(&self) -> SeverityCounts {
        Self::count(&self.violations)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(severity: Severity) -> Violation {
        Violation::new(vec!["age".into()], severity, ViolationSource::Invariant, "x")
    }

    #[test]
    fn aggregate_prefers_critical() {
        let counts = SeverityCounts {
            critical: 1,
            non_critical: 9,
        };
        assert_eq!(Severity::aggregate(counts), Severity::Critical);
        assert_eq!(Severity::aggregate(SeverityCounts::default()), Severity::None);
    }

    #[test]
    fn severity_labels_parse() {
        assert_eq!("Non-Critical".parse::<Severity>(), Ok(Severity::NonCritical));
        assert_eq!("low".parse::<Severity>(), Ok(Severity::NonCritical));
        assert_eq!(" Critical ".parse::<Severity>(), Ok(Severity::Critical));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn result_counts_match() {
        let result = ValidationResult::from_violations(vec![
            violation(Severity::NonCritical),
            violation(Severity::Critical),
        ]);
        assert_eq!(result.num_errors, 2);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.counts().total(), 2);
    }

    #[test]
    fn message_carries_severity() {
        let v = violation(Severity::NonCritical);
        assert_eq!(v.message, "x (Non-Critical)");
    }
}
