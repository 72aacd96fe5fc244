//! Field descriptors, field groups, and per-variant schemas.
//!
//! Every variant's schema is the union of a fixed list of named field groups.
//! When two groups of one variant declare the same field name, the variant's
//! precedence table names the winning group; otherwise the first declaring
//! group wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::variant::Variant;
use crate::vocabulary::Vocabulary;
use crate::vocabulary::Vocabulary as V;

use FieldKind::{Boolean, Date, Float, FreeNumeric, Integer, Text};

/// Semantic type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Boolean,
    Date,
    /// A member of the code list.
    Coded(Vocabulary),
    /// A member of the code list, or free text.
    CodedOrText(Vocabulary),
    /// Comma-separated members of the code list (multi-select answers).
    CodedList(Vocabulary),
    /// Comma-separated members of the code list or free text.
    CodedOrTextList(Vocabulary),
    /// Nominally numeric, may arrive as free text or a date-time.
    FreeNumeric,
}

impl FieldKind {
    pub fn vocabulary(self) -> Option<Vocabulary> {
        match self {
            FieldKind::Coded(v)
            | FieldKind::CodedOrText(v)
            | FieldKind::CodedList(v)
            | FieldKind::CodedOrTextList(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Integer => f.write_str("integer"),
            FieldKind::Float => f.write_str("float"),
            FieldKind::Text => f.write_str("text"),
            FieldKind::Boolean => f.write_str("boolean"),
            FieldKind::Date => f.write_str("date"),
            FieldKind::Coded(v) => write!(f, "code from {v}"),
            FieldKind::CodedOrText(v) => write!(f, "code from {v} or text"),
            FieldKind::CodedList(v) => write!(f, "list of codes from {v}"),
            FieldKind::CodedOrTextList(v) => write!(f, "list of codes from {v} or text"),
            FieldKind::FreeNumeric => f.write_str("number or text"),
        }
    }
}

/// Whether a field's key must appear in the input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// Key must be present; the value may still be missing.
    Required,
    /// An absent key reads as missing.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind,
        presence: Presence::Required,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind,
        presence: Presence::Optional,
    }
}

/// Which structure stores a group's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Respondent,
    Trip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupId {
    BaseRespondent,
    Trip,
    EmployeeFields,
    AirPassengerFields,
    ArrivingFields,
    DepartingFields,
    ResidentFields,
    VisitorFields,
    DepartingResidentFields,
}

impl GroupId {
    pub const ALL: [GroupId; 9] = [
        GroupId::BaseRespondent,
        GroupId::Trip,
        GroupId::EmployeeFields,
        GroupId::AirPassengerFields,
        GroupId::ArrivingFields,
        GroupId::DepartingFields,
        GroupId::ResidentFields,
        GroupId::VisitorFields,
        GroupId::DepartingResidentFields,
    ];

    pub fn group(self) -> &'static FieldGroup {
        match self {
            GroupId::BaseRespondent => &BASE_RESPONDENT,
            GroupId::Trip => &TRIP,
            GroupId::EmployeeFields => &EMPLOYEE_FIELDS,
            GroupId::AirPassengerFields => &AIR_PASSENGER_FIELDS,
            GroupId::ArrivingFields => &ARRIVING_FIELDS,
            GroupId::DepartingFields => &DEPARTING_FIELDS,
            GroupId::ResidentFields => &RESIDENT_FIELDS,
            GroupId::VisitorFields => &VISITOR_FIELDS,
            GroupId::DepartingResidentFields => &DEPARTING_RESIDENT_FIELDS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GroupId::BaseRespondent => "BaseRespondent",
            GroupId::Trip => "Trip",
            GroupId::EmployeeFields => "EmployeeFields",
            GroupId::AirPassengerFields => "AirPassengerFields",
            GroupId::ArrivingFields => "ArrivingFields",
            GroupId::DepartingFields => "DepartingFields",
            GroupId::ResidentFields => "ResidentFields",
            GroupId::VisitorFields => "VisitorFields",
            GroupId::DepartingResidentFields => "DepartingResidentFields",
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named set of fields stored by one owner.
#[derive(Debug)]
pub struct FieldGroup {
    pub id: GroupId,
    pub owner: Owner,
    pub fields: &'static [FieldDescriptor],
}

impl FieldGroup {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const fn coded(v: Vocabulary) -> FieldKind {
    FieldKind::Coded(v)
}

const fn coded_or_text(v: Vocabulary) -> FieldKind {
    FieldKind::CodedOrText(v)
}

const fn coded_list(v: Vocabulary) -> FieldKind {
    FieldKind::CodedList(v)
}

const fn coded_or_text_list(v: Vocabulary) -> FieldKind {
    FieldKind::CodedOrTextList(v)
}

pub static BASE_RESPONDENT: FieldGroup = FieldGroup {
    id: GroupId::BaseRespondent,
    owner: Owner::Respondent,
    fields: &[
        required("respondent_id", Integer),
        required("market_segment", coded(V::MarketSegment)),
        optional("is_completed", Boolean),
        optional("is_pilot", Boolean),
        optional("is_synthetic", Boolean),
        optional("date_completed", Date),
        optional("time_completed", Text),
        optional("weight_departing_only", Float),
        optional("weight_departing_and_arriving", Float),
        optional("weight_employee", Float),
        optional("weight_annual_passenger", Float),
        optional("interview_location", coded(V::InterviewLocation)),
        optional("passenger_type", coded(V::PassengerType)),
        optional("is_qualified_age", Boolean),
        optional("is_qualified_not_connecting", Boolean),
        optional("resident_visitor_general", coded(V::ResidentVisitorGeneral)),
        optional("resident_visitor_followup", Boolean),
        optional("resident_visitor", coded(V::ResidentVisitor)),
        optional("country_of_residence", coded(V::Country)),
        optional("state_of_residence", coded(V::State)),
        optional("home_location_lat", Float),
        optional("home_location_lon", Float),
        optional("age", coded(V::Age)),
        optional("gender", coded(V::Gender)),
        optional("race_aian", Boolean),
        optional("race_asian", Boolean),
        optional("race_black", Boolean),
        optional("race_hispanic", Boolean),
        optional("race_middle_eastern", Boolean),
        optional("race_hp", Boolean),
        optional("race_white", Boolean),
        optional("race_other", Boolean),
        optional("race_unknown", Boolean),
        optional("number_persons_in_household", coded(V::HouseholdSize)),
        optional("number_vehicles", coded(V::HouseholdVehicles)),
        optional("household_income", coded(V::HouseholdIncome)),
        optional("is_income_below_poverty", Boolean),
        optional("number_of_workers", coded(V::HouseholdWorkers)),
        optional("other_home_language", Boolean),
        optional("english_proficiency", coded(V::EnglishProficiency)),
    ],
};

pub static TRIP: FieldGroup = FieldGroup {
    id: GroupId::Trip,
    owner: Owner::Trip,
    fields: &[
        optional("inbound_or_outbound", coded(V::InboundOutbound)),
        optional("main_mode", coded_or_text(V::TravelMode)),
        optional("main_mode_grouped", coded(V::ModeGrouped)),
        optional("trip_start_time", coded(V::DepartTime)),
        optional("trip_arrival_time", coded(V::DepartTime)),
        optional("origin_activity_type", coded_or_text(V::ActivityType)),
        optional("origin_name", Text),
        optional("origin_state", coded_or_text(V::State)),
        optional("origin_zip", Text),
        optional("origin_lat", Float),
        optional("origin_lon", Float),
        optional("origin_municipal_zone", Text),
        optional("origin_pmsa", Text),
        optional("destination_activity_type", coded_or_text(V::ActivityType)),
        optional("destination_name", Text),
        optional("destination_state", coded_or_text(V::State)),
        optional("destination_zip", Text),
        optional("destination_lat", Float),
        optional("destination_lon", Float),
        optional("destination_municipal_zone", Text),
        optional("destination_pmsa", Text),
        optional("number_transit_vehicles", Integer),
        optional("to_airport_transit_route_1", Text),
        optional("to_airport_transit_route_2", Text),
        optional("to_airport_transit_route_3", Text),
        optional("to_airport_transit_route_4", Text),
        optional("from_airport_transit_route_1", Text),
        optional("from_airport_transit_route_2", Text),
        optional("from_airport_transit_route_3", Text),
        optional("from_airport_transit_route_4", Text),
        optional("mode_sequence", coded_or_text_list(V::TravelMode)),
        optional("access_mode", coded_or_text(V::TravelMode)),
        optional("egress_mode", coded_or_text(V::TravelMode)),
        optional("taxi_fhv_fare", FreeNumeric),
        optional("taxi_fhv_wait", FreeNumeric),
        optional("parking_location", coded_or_text(V::ParkingLocation)),
        optional("parking_cost", FreeNumeric),
        optional("parking_cost_frequency", coded(V::ParkingCostFrequency)),
        optional("reimbursement", coded(V::ParkingReimbursement)),
        optional("transit_boarding_lat", Float),
        optional("transit_boarding_lon", Float),
        optional("transit_alighting_lat", Float),
        optional("transit_alighting_lon", Float),
    ],
};

pub static EMPLOYEE_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::EmployeeFields,
    owner: Owner::Respondent,
    fields: &[
        optional("shift_start_airport_building", coded_or_text(V::SanBuildings)),
        optional("employer", coded_or_text(V::Employers)),
        optional("occupation", coded_or_text(V::Occupations)),
        optional("number_hours_worked", coded(V::HoursWorked)),
        optional("number_commute_days", coded(V::CommuteDays)),
        optional("shift_start_time", coded(V::DepartTime)),
        optional("shift_end_time", coded(V::DepartTime)),
        optional("reverse_commute_mode", coded_or_text(V::TravelMode)),
        optional("past_commute_modes", coded_list(V::TravelMode)),
        optional("alternative_commute_modes", coded_list(V::TravelMode)),
        optional("commute_mode_decision", coded_list(V::CommuteModeDecision)),
        optional("employee_parking", Boolean),
        optional("trip_start_time", coded_or_text(V::DepartTime)),
    ],
};

pub static AIR_PASSENGER_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::AirPassengerFields,
    owner: Owner::Respondent,
    fields: &[
        optional("airline", coded_or_text(V::Airline)),
        optional("flight_number", Text),
        optional("next_flight_destination", Text),
        optional("previous_flight_origin", Text),
        optional("is_final_destination", Boolean),
        optional("final_flight_destination", Text),
        optional("is_original_origin", Boolean),
        optional("original_flight_origin", Text),
        optional("flight_departure_time", coded(V::DepartTime)),
        optional("flight_arrival_time", coded(V::DepartTime)),
        optional("flight_purpose", coded_or_text(V::FlightPurpose)),
        optional("convention_center", Boolean),
        optional("convention_center_activity", coded_or_text(V::ConventionCenterActivity)),
        optional("checked_bags", coded(V::CheckedBags)),
        optional("carryon_bags", coded(V::CarryOns)),
        optional("party_size_flight", coded_or_text(V::PartySize)),
        optional("party_size_ground_access_same", Boolean),
        optional("party_size_ground_access", coded_or_text(V::PartySize)),
        optional("party_includes_child_aged00to02", Boolean),
        optional("party_includes_child_aged03to09", Boolean),
        optional("party_includes_child_aged10to12", Boolean),
        optional("party_includes_child_aged13to17", Boolean),
        optional("party_includes_coworker", Boolean),
        optional("party_includes_friend_relative", Boolean),
        optional("sdia_flight_frequency", coded(V::SanFlightFrequency)),
        optional("non_sdia_flight_frequency", coded(V::SanFlightFrequency)),
        optional("sdia_previous_accessmode", coded(V::SanFlightFrequency)),
        optional("sdia_accessmode_split", coded_list(V::TravelMode)),
        optional("sdia_accessmode_decision", coded_list(V::CommuteModeDecision)),
        optional("reverse_mode", coded_or_text(V::TravelMode)),
        optional("sdia_transit_awareness", Boolean),
        optional("reasons_no_transit", coded_list(V::ReasonsNoTransit)),
        optional("airport_access_transit_use_elsewhere", Boolean),
        optional("airport_access_transit_name", Text),
    ],
};

pub static ARRIVING_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::ArrivingFields,
    owner: Owner::Respondent,
    fields: &[optional("nights_visited", coded(V::TravelDuration))],
};

pub static DEPARTING_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::DepartingFields,
    owner: Owner::Respondent,
    fields: &[
        optional("nights_away", coded(V::TravelDuration)),
        optional("trip_start_time", coded(V::DepartTime)),
    ],
};

pub static RESIDENT_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::ResidentFields,
    owner: Owner::Respondent,
    fields: &[optional("general_use_transit_resident", coded(V::TransitUseFrequency))],
};

pub static VISITOR_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::VisitorFields,
    owner: Owner::Respondent,
    fields: &[
        optional(
            "general_use_transit_visitor_home",
            coded(V::TransitUseFrequency),
        ),
        optional("general_modes_used_visitor", coded_list(V::TravelMode)),
    ],
};

pub static DEPARTING_RESIDENT_FIELDS: FieldGroup = FieldGroup {
    id: GroupId::DepartingResidentFields,
    owner: Owner::Respondent,
    fields: &[
        optional("car_availability", coded(V::CarAvailability)),
        optional("reverse_commute_mode", coded_or_text(V::TravelMode)),
    ],
};

/// A field as it appears in one variant's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedField {
    pub descriptor: FieldDescriptor,
    pub group: GroupId,
    pub owner: Owner,
}

impl ResolvedField {
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn kind(&self) -> FieldKind {
        self.descriptor.kind
    }
}

/// The composed field table of one variant.
#[derive(Debug, Clone)]
pub struct VariantSchema {
    variant: Variant,
    fields: Vec<ResolvedField>,
    index: BTreeMap<&'static str, usize>,
}

static SCHEMAS: LazyLock<Vec<VariantSchema>> =
    LazyLock::new(|| Variant::ALL.iter().map(|v| VariantSchema::build(*v)).collect());

impl VariantSchema {
    /// Cached schema of `variant`.
    pub fn for_variant(variant: Variant) -> &'static VariantSchema {
        &SCHEMAS[variant.index()]
    }

    /// Unions the variant's groups in declared order.
    pub fn build(variant: Variant) -> Self {
        let mut fields: Vec<ResolvedField> = Vec::new();
        let mut index: BTreeMap<&'static str, usize> = BTreeMap::new();
        for group_id in variant.groups() {
            let group = group_id.group();
            for descriptor in group.fields {
                let resolved = ResolvedField {
                    descriptor: *descriptor,
                    group: group.id,
                    owner: group.owner,
                };
                match index.get(descriptor.name) {
                    None => {
                        index.insert(descriptor.name, fields.len());
                        fields.push(resolved);
                    }
                    Some(&pos) => {
                        if variant.precedence_for(descriptor.name) == Some(group.id) {
                            fields[pos] = resolved;
                        }
                    }
                }
            }
        }
        Self {
            variant,
            fields,
            index,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.index.get(name).map(|&pos| &self.fields[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_are_unique_within_each_group() {
        for id in GroupId::ALL {
            let group = id.group();
            assert_eq!(group.id, id);
            let mut names: Vec<_> = group.fields.iter().map(|f| f.name).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len(), "duplicate field in {id}");
        }
    }

    #[test]
    fn employee_trip_start_time_comes_from_employee_fields() {
        let schema = VariantSchema::build(Variant::Employee);
        let field = schema.field("trip_start_time").unwrap();
        assert_eq!(field.group, GroupId::EmployeeFields);
        assert_eq!(field.owner, Owner::Respondent);
        assert_eq!(field.kind(), FieldKind::CodedOrText(Vocabulary::DepartTime));
    }

    #[test]
    fn departing_trip_start_time_comes_from_departing_fields() {
        let schema = VariantSchema::build(Variant::DepartingPassengerResident);
        let field = schema.field("trip_start_time").unwrap();
        assert_eq!(field.group, GroupId::DepartingFields);
    }

    #[test]
    fn arriving_trip_start_time_stays_on_trip() {
        let schema = VariantSchema::build(Variant::ArrivingAirPassenger);
        let field = schema.field("trip_start_time").unwrap();
        assert_eq!(field.group, GroupId::Trip);
        assert_eq!(field.owner, Owner::Trip);
    }

    #[test]
    fn departing_resident_adds_car_availability() {
        let schema = VariantSchema::for_variant(Variant::DepartingPassengerResident);
        assert!(schema.contains("car_availability"));
        assert!(schema.contains("general_use_transit_resident"));
        assert!(schema.contains("nights_away"));
        assert!(!VariantSchema::for_variant(Variant::DepartingPassengerVisitor)
            .contains("car_availability"));
    }

    #[test]
    fn combined_variants_are_supersets() {
        let general = VariantSchema::for_variant(Variant::DepartingAirPassenger);
        let specific = VariantSchema::for_variant(Variant::DepartingPassengerVisitor);
        for field in general.fields() {
            assert!(specific.contains(field.name()), "missing {}", field.name());
        }
        assert!(specific.len() > general.len());
    }

    #[test]
    fn multi_select_fields_are_lists() {
        let employee = VariantSchema::for_variant(Variant::Employee);
        assert_eq!(
            employee.field("past_commute_modes").unwrap().kind(),
            FieldKind::CodedList(Vocabulary::TravelMode)
        );
        assert_eq!(
            employee.field("commute_mode_decision").unwrap().kind(),
            FieldKind::CodedList(Vocabulary::CommuteModeDecision)
        );
        assert_eq!(
            employee.field("mode_sequence").unwrap().kind(),
            FieldKind::CodedOrTextList(Vocabulary::TravelMode)
        );

        let visitor = VariantSchema::for_variant(Variant::ArrivingPassengerVisitor);
        assert!(visitor.contains("reasons_no_transit"));
        assert!(visitor.contains("general_modes_used_visitor"));
        assert!(!employee.contains("reasons_no_transit"));
    }

    #[test]
    fn employee_lacks_passenger_fields() {
        let schema = VariantSchema::for_variant(Variant::Employee);
        assert!(!schema.contains("airline"));
        assert!(schema.contains("employer"));
        assert!(schema.contains("parking_cost"));
    }
}
