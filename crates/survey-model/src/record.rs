use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Owner;
use crate::validation::Violation;
use crate::value::FieldValue;
use crate::variant::Variant;

/// Field name to typed value.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Fields computed after coercion, in derivation order.
pub const DERIVED_FIELDS: &[&str] = &[
    "taxi_fhv_fare_numeric",
    "taxi_fhv_wait_numeric",
    "parking_cost_numeric",
    "non_airport_activity_type",
    "airport_terminal",
    "thanksgiving_week_flag",
    "flight_endpoint",
    "is_same_flight_endpoint",
];

/// The ground-access trip owned by a respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub fields: FieldMap,
}

impl Trip {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// A typed respondent record of one concrete variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub variant: Variant,
    /// Respondent-level fields, including respondent-level derived fields.
    pub fields: FieldMap,
    pub trip: Trip,
    /// Non-fatal findings raised while coercing fields.
    pub notes: Vec<Violation>,
}

impl SurveyRecord {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            fields: FieldMap::new(),
            trip: Trip::default(),
            notes: Vec::new(),
        }
    }

    /// Looks a field up on the respondent, then on the trip.
    ///
    /// `None` means the field is absent from this record, which rules treat
    /// like a missing value.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).or_else(|| self.trip.get(name))
    }

    pub fn insert(&mut self, owner: Owner, name: impl Into<String>, value: FieldValue) {
        match owner {
            Owner::Respondent => self.fields.insert(name.into(), value),
            Owner::Trip => self.trip.fields.insert(name.into(), value),
        };
    }

    /// True when the field is absent or holds a missing value.
    pub fn is_missing(&self, name: &str) -> bool {
        self.get(name).is_none_or(FieldValue::is_missing)
    }

    pub fn code(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_code)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn respondent_id(&self) -> Option<i64> {
        self.code("respondent_id")
    }

    /// All fields, respondent first, then trip.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .chain(self.trip.fields.iter())
            .map(|(name, value)| (name.as_str(), value))
    }
}
