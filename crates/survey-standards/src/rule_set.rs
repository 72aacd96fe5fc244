use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use survey_model::SkipLogicRule;

use crate::csv::skip_logic::parse_skip_logic_rules;
use crate::doctor::DoctorReport;
use crate::error::StandardsError;
use crate::paths::default_rules_path;

/// Loaded skip-logic rules, grouped per class in table order.
///
/// A `RuleSet` is never mutated after construction; share it behind an
/// `Arc` across validation threads.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules_by_class: BTreeMap<String, Vec<SkipLogicRule>>,
    source: Option<PathBuf>,
}

impl RuleSet {
    pub fn new(rules: impl IntoIterator<Item = SkipLogicRule>) -> Self {
        let mut rules_by_class: BTreeMap<String, Vec<SkipLogicRule>> = BTreeMap::new();
        for rule in rules {
            rules_by_class
                .entry(rule.class.clone())
                .or_default()
                .push(rule);
        }
        Self {
            rules_by_class,
            source: None,
        }
    }

    /// Loads the rule table at `path`.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let rules = parse_skip_logic_rules(path)?;
        let mut set = Self::new(rules);
        set.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            rules = set.len(),
            classes = set.rules_by_class.len(),
            "loaded skip-logic rules"
        );
        Ok(set)
    }

    /// Loads the rule table from the default standards location.
    pub fn load_default() -> Result<Self, StandardsError> {
        Self::load(&default_rules_path())
    }

    /// Rules targeting exactly `class`, in table order.
    pub fn rules_for(&self, class: &str) -> &[SkipLogicRule] {
        self.rules_by_class
            .get(class)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.rules_by_class.keys().map(String::as_str)
    }

    /// Rule count per class.
    pub fn counts_by_class(&self) -> Vec<(&str, usize)> {
        self.rules_by_class
            .iter()
            .map(|(class, rules)| (class.as_str(), rules.len()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkipLogicRule> {
        self.rules_by_class.values().flatten()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rules_by_class.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules_by_class.is_empty()
    }

    /// Advisory report on rules that can never apply as written.
    pub fn doctor(&self) -> DoctorReport {
        DoctorReport::inspect(self)
    }
}
