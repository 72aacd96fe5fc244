//! Skip-logic rule engine.
//!
//! Rules are selected by exact class name and evaluated in table order. Every
//! violated rule is recorded; nothing short-circuits.

use std::sync::Arc;

use survey_model::{
    CheckKind, RuleCondition, SeverityCounts, SkipLogicRule, SurveyRecord, Violation,
    ViolationSource,
};
use survey_standards::RuleSet;

/// Outcome of evaluating one class's rules against one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub violations: Vec<Violation>,
    pub counts: SeverityCounts,
}

impl Evaluation {
    /// Number of violations.
    pub fn count(&self) -> usize {
        self.violations.len()
    }
}

/// Evaluates skip-logic rules against typed records.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Arc<RuleSet>,
}

impl RuleEngine {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluates every rule whose class is exactly `class`.
    pub fn evaluate(&self, class: &str, record: &SurveyRecord) -> Evaluation {
        let mut evaluation = Evaluation::default();
        for (index, rule) in self.rules.rules_for(class).iter().enumerate() {
            if !self.is_violated(rule, record) {
                continue;
            }
            let violation = Violation::new(
                rule.check_variables.clone(),
                rule.severity,
                ViolationSource::Rule {
                    class: class.to_string(),
                    index,
                },
                format!("{} check failed: {}", rule.check, rule.joined_variables()),
            );
            tracing::trace!(class, index, message = %violation.message, "rule violated");
            evaluation.counts.record(rule.severity);
            evaluation.violations.push(violation);
        }
        evaluation
    }

    fn is_violated(&self, rule: &SkipLogicRule, record: &SurveyRecord) -> bool {
        match rule.check {
            CheckKind::Critical => self.any_missing(rule, record),
            CheckKind::Missing => {
                rule.condition
                    .as_ref()
                    .is_some_and(|condition| condition_matches(condition, record))
                    && self.any_missing(rule, record)
            }
            CheckKind::Value => {
                let applies = rule
                    .condition
                    .as_ref()
                    .is_none_or(|condition| condition_matches(condition, record));
                applies && self.any_outside_values(rule, record)
            }
        }
    }

    /// True when any check variable is absent or holds a missing value.
    fn any_missing(&self, rule: &SkipLogicRule, record: &SurveyRecord) -> bool {
        rule.check_variables
            .iter()
            .any(|variable| record.is_missing(variable))
    }

    /// True when any check variable is absent or not among the accepted values.
    fn any_outside_values(&self, rule: &SkipLogicRule, record: &SurveyRecord) -> bool {
        rule.check_variables.iter().any(|variable| {
            record.get(variable).is_none_or(|value| {
                !rule
                    .check_values
                    .iter()
                    .any(|accepted| value.matches_token(accepted))
            })
        })
    }
}

/// The condition matches when the variable's value equals one of the
/// accepted alternatives. Missing values never match.
fn condition_matches(condition: &RuleCondition, record: &SurveyRecord) -> bool {
    record.get(&condition.variable).is_some_and(|value| {
        condition
            .values
            .iter()
            .any(|accepted| value.matches_token(accepted))
    })
}

#[cfg(test)]
mod tests {
    use survey_model::{FieldValue, Owner, Severity, Variant, Vocabulary};

    use super::*;

    fn rule(check: CheckKind, variables: &[&str], values: &[&str]) -> SkipLogicRule {
        SkipLogicRule {
            class: "Employee".to_string(),
            condition: None,
            check,
            check_variables: variables.iter().map(|v| (*v).to_string()).collect(),
            check_values: values.iter().map(|v| (*v).to_string()).collect(),
            severity: Severity::Critical,
        }
    }

    fn engine(rules: Vec<SkipLogicRule>) -> RuleEngine {
        RuleEngine::new(Arc::new(RuleSet::new(rules)))
    }

    fn record() -> SurveyRecord {
        let mut record = SurveyRecord::new(Variant::Employee);
        record.insert(Owner::Respondent, "age", FieldValue::Missing);
        record.insert(
            Owner::Respondent,
            "gender",
            FieldValue::Code {
                vocabulary: Vocabulary::Gender,
                code: 1,
            },
        );
        record
    }

    #[test]
    fn critical_fires_on_missing_or_absent() {
        let engine = engine(vec![
            rule(CheckKind::Critical, &["gender"], &[]),
            rule(CheckKind::Critical, &["age"], &[]),
            rule(CheckKind::Critical, &["not_a_field"], &[]),
        ]);
        let evaluation = engine.evaluate("Employee", &record());
        assert_eq!(evaluation.count(), 2);
        assert_eq!(evaluation.counts.critical, 2);
        assert_eq!(
            evaluation.violations[0].source,
            ViolationSource::Rule {
                class: "Employee".into(),
                index: 1
            }
        );
    }

    #[test]
    fn missing_without_condition_never_fires() {
        let engine = engine(vec![rule(CheckKind::Missing, &["age"], &[])]);
        assert_eq!(engine.evaluate("Employee", &record()).count(), 0);
    }

    #[test]
    fn missing_condition_on_missing_value_does_not_match() {
        let mut missing = rule(CheckKind::Missing, &["gender"], &[]);
        missing.condition = Some(RuleCondition {
            variable: "age".into(),
            values: vec!["".into()],
        });
        let engine = engine(vec![missing]);
        assert_eq!(engine.evaluate("Employee", &record()).count(), 0);
    }

    #[test]
    fn value_check_compares_tokens() {
        let engine = engine(vec![
            rule(CheckKind::Value, &["gender"], &["1", "2"]),
            rule(CheckKind::Value, &["gender"], &["2"]),
            rule(CheckKind::Value, &["age"], &["1"]),
        ]);
        let evaluation = engine.evaluate("Employee", &record());
        assert_eq!(evaluation.count(), 2);
    }

    #[test]
    fn other_classes_are_ignored() {
        let engine = engine(vec![rule(CheckKind::Critical, &["age"], &[])]);
        assert_eq!(engine.evaluate("Visitor", &record()).count(), 0);
    }
}
