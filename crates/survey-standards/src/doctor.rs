#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use survey_model::{CheckKind, DERIVED_FIELDS, Variant, VariantSchema};

use crate::rule_set::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The rule's class is not a variant name, so no record ever selects it.
    UnknownClass,
    /// A check or condition variable is not declared for the class.
    UndeclaredVariable,
    /// A condition variable with no accepted values never matches.
    EmptyCondition,
    /// A `missing` rule without a condition never fires.
    UnconditionedMissing,
    /// A variant has no rules at all.
    VariantWithoutRules,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DoctorFinding {
    pub kind: FindingKind,
    pub class: String,
    /// Position of the rule within its class, if the finding is rule-level.
    pub rule_index: Option<usize>,
    pub message: String,
}

impl fmt::Display for DoctorFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule_index {
            Some(index) => write!(f, "{} rule #{}: {}", self.class, index + 1, self.message),
            None => write!(f, "{}: {}", self.class, self.message),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DoctorReport {
    pub rule_count: usize,
    pub class_count: usize,
    pub findings: Vec<DoctorFinding>,
}

impl DoctorReport {
    pub fn inspect(rules: &RuleSet) -> Self {
        let mut findings = Vec::new();
        for class in rules.classes() {
            let schema = Variant::from_str(class).ok().map(VariantSchema::for_variant);
            if schema.is_none() {
                findings.push(DoctorFinding {
                    kind: FindingKind::UnknownClass,
                    class: class.to_string(),
                    rule_index: None,
                    message: "class is not a respondent variant".to_string(),
                });
            }
            for (index, rule) in rules.rules_for(class).iter().enumerate() {
                let mut finding = |kind: FindingKind, message: String| {
                    findings.push(DoctorFinding {
                        kind,
                        class: class.to_string(),
                        rule_index: Some(index),
                        message,
                    });
                };
                if let Some(schema) = schema {
                    let declared =
                        |name: &str| schema.contains(name) || DERIVED_FIELDS.contains(&name);
                    for variable in &rule.check_variables {
                        if !declared(variable.as_str()) {
                            finding(
                                FindingKind::UndeclaredVariable,
                                format!("check variable {variable} is not declared"),
                            );
                        }
                    }
                    if let Some(condition) = &rule.condition
                        && !declared(condition.variable.as_str())
                    {
                        finding(
                            FindingKind::UndeclaredVariable,
                            format!("condition variable {} is not declared", condition.variable),
                        );
                    }
                }
                match &rule.condition {
                    Some(condition) if condition.values.is_empty() => finding(
                        FindingKind::EmptyCondition,
                        format!("condition on {} has no values", condition.variable),
                    ),
                    None if rule.check == CheckKind::Missing => finding(
                        FindingKind::UnconditionedMissing,
                        "missing check without a condition never fires".to_string(),
                    ),
                    _ => {}
                }
            }
        }
        for variant in Variant::ALL {
            if rules.rules_for(variant.name()).is_empty() {
                findings.push(DoctorFinding {
                    kind: FindingKind::VariantWithoutRules,
                    class: variant.name().to_string(),
                    rule_index: None,
                    message: "no rules target this variant".to_string(),
                });
            }
        }
        Self {
            rule_count: rules.len(),
            class_count: rules.classes().count(),
            findings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
