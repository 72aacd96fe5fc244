#![deny(unsafe_code)]

use std::io::Read;
use std::path::Path;

use survey_model::rule::split_list;
use survey_model::{CheckKind, RuleCondition, Severity, SkipLogicRule};

use crate::error::StandardsError;

const CLASS: &str = "class";
const CONDITION_VARIABLE: &str = "condition_variable";
const CONDITION_VALUE: &str = "condition_value";
const CHECK_TYPE: &str = "check_type";
const CHECK_VARIABLES: &str = "check_variables";
const CHECK_VALUES: &str = "check_values";
const SEVERITY: &str = "severity";

/// Parses a skip-logic rule table from `path`.
pub fn parse_skip_logic_rules(path: &Path) -> Result<Vec<SkipLogicRule>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    parse_skip_logic_rules_from_reader(bytes.as_slice(), path)
}

/// Parses a skip-logic rule table; `origin` names the source in errors.
///
/// Rows are returned in table order. Blank rows are skipped.
pub fn parse_skip_logic_rules_from_reader<R: Read>(
    input: R,
    origin: &Path,
) -> Result<Vec<SkipLogicRule>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(origin, &e))?
        .clone();

    let header_idx = |name: &str| -> Option<usize> {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
    };
    let require = |name: &str| -> Result<usize, StandardsError> {
        header_idx(name).ok_or_else(|| StandardsError::MissingColumn {
            path: origin.to_path_buf(),
            column: name.to_string(),
        })
    };

    let class_i = require(CLASS)?;
    let check_type_i = require(CHECK_TYPE)?;
    let check_variables_i = require(CHECK_VARIABLES)?;
    let severity_i = require(SEVERITY)?;
    let condition_variable_i = header_idx(CONDITION_VARIABLE);
    let condition_value_i = header_idx(CONDITION_VALUE);
    let check_values_i = header_idx(CHECK_VALUES);

    let mut rules = Vec::new();
    for (row_idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| StandardsError::csv(origin, &e))?;
        let line = row
            .position()
            .map_or(row_idx as u64 + 2, csv::Position::line);

        let get = |i: usize| -> Option<&str> {
            row.get(i).map(str::trim).filter(|s| !s.is_empty())
        };
        let invalid = |message: String| StandardsError::InvalidRule {
            path: origin.to_path_buf(),
            line,
            message,
        };

        let Some(class) = get(class_i) else {
            continue;
        };

        let check = get(check_type_i)
            .ok_or_else(|| invalid("missing check_type".to_string()))?
            .parse::<CheckKind>()
            .map_err(invalid)?;
        let severity = get(severity_i)
            .ok_or_else(|| invalid("missing severity".to_string()))?
            .parse::<Severity>()
            .map_err(invalid)?;
        if severity == Severity::None {
            return Err(invalid("severity must be Critical or Non-Critical".to_string()));
        }

        let check_variables = get(check_variables_i).map(split_list).unwrap_or_default();
        if check_variables.is_empty() {
            return Err(invalid("check_variables is empty".to_string()));
        }

        let check_values = check_values_i
            .and_then(get)
            .map(split_list)
            .unwrap_or_default();
        if check == CheckKind::Value && check_values.is_empty() {
            return Err(invalid("value check without check_values".to_string()));
        }

        let condition = condition_variable_i.and_then(get).map(|variable| RuleCondition {
            variable: variable.to_string(),
            values: condition_value_i
                .and_then(get)
                .map(split_list)
                .unwrap_or_default(),
        });

        rules.push(SkipLogicRule {
            class: class.to_string(),
            condition,
            check,
            check_variables,
            check_values,
            severity,
        });
    }

    tracing::debug!(path = %origin.display(), rules = rules.len(), "parsed skip-logic rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<SkipLogicRule>, StandardsError> {
        parse_skip_logic_rules_from_reader(text.as_bytes(), Path::new("rules.csv"))
    }

    #[test]
    fn parses_all_check_kinds() {
        let rules = parse(
            "class,condition_variable,condition_value,check_type,check_variables,check_values,severity\n\
             Employee,,,critical,\"age, gender\",,Critical\n\
             Employee,market_segment,\"1,2\",missing,passenger_type,,Non-Critical\n\
             Employee,,,value,reimbursement,\"1,2,3\",Non-Critical\n",
        )
        .unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].check_variables, vec!["age", "gender"]);
        assert_eq!(rules[0].condition, None);
        let condition = rules[1].condition.as_ref().unwrap();
        assert_eq!(condition.variable, "market_segment");
        assert_eq!(condition.values, vec!["1", "2"]);
        assert_eq!(rules[2].check_values, vec!["1", "2", "3"]);
        assert_eq!(rules[2].severity, Severity::NonCritical);
    }

    #[test]
    fn strips_bom_and_ignores_extra_columns() {
        let rules = parse(
            "\u{feff}class , check_type,check_variables,severity,notes\n\
             Visitor,critical,age,Critical,free text\n",
        )
        .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].class, "Visitor");
    }

    #[test]
    fn skips_blank_rows() {
        let rules = parse(
            "class,check_type,check_variables,severity\n\
             ,,,\n\
             Resident,critical,age,Critical\n",
        )
        .unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn rejects_unknown_check_type_with_line() {
        let err = parse(
            "class,check_type,check_variables,severity\n\
             Resident,critical,age,Critical\n\
             Resident,range,age,Critical\n",
        )
        .unwrap_err();
        match err {
            StandardsError::InvalidRule { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("range"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_value_rule_without_values() {
        let err = parse(
            "class,check_type,check_variables,check_values,severity\n\
             Resident,value,age,,Critical\n",
        )
        .unwrap_err();
        assert!(matches!(err, StandardsError::InvalidRule { .. }));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse("class,check_type,severity\nResident,critical,Critical\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::MissingColumn { ref column, .. } if column == "check_variables"
        ));
    }
}
