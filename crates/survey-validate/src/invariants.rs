//! Structural invariants evaluated alongside table rules.

use survey_model::{Severity, SurveyRecord, Violation, ViolationSource};

/// Race indicators that may not be combined with `race_unknown`.
pub const RACE_FIELDS: &[&str] = &[
    "race_aian",
    "race_asian",
    "race_black",
    "race_hispanic",
    "race_middle_eastern",
    "race_hp",
    "race_white",
    "race_other",
];

/// `race_unknown` excludes every other race indicator.
///
/// Yields at most one violation however many indicators conflict.
pub fn check_race_exclusivity(record: &SurveyRecord) -> Option<Violation> {
    if record.flag("race_unknown") != Some(true) {
        return None;
    }
    let conflicting: Vec<&str> = RACE_FIELDS
        .iter()
        .copied()
        .filter(|field| record.flag(field) == Some(true))
        .collect();
    if conflicting.is_empty() {
        return None;
    }
    let mut fields = vec!["race_unknown".to_string()];
    fields.extend(conflicting.iter().map(|f| (*f).to_string()));
    Some(Violation::new(
        fields,
        Severity::NonCritical,
        ViolationSource::Invariant,
        format!("race_unknown combined with {}", conflicting.join(", ")),
    ))
}

/// All structural invariants, in a fixed order.
pub fn check_invariants(record: &SurveyRecord) -> Vec<Violation> {
    check_race_exclusivity(record).into_iter().collect()
}
