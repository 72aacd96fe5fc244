//! Fixed code lists used as the legal value domain of coded fields.
//!
//! The vocabulary is read-only: every list is a static table compiled into the
//! crate, so lookups never allocate and the tables can be shared freely across
//! threads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codes;

/// A named code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vocabulary {
    /// Where the respondent was intercepted.
    InterviewLocation,
    /// Trip direction relative to the airport.
    InboundOutbound,
    /// Respondent market segment.
    MarketSegment,
    /// Whether an air passenger is departing or arriving.
    PassengerType,
    /// First-pass resident/visitor screener answer.
    ResidentVisitorGeneral,
    /// Region of residence.
    ResidentVisitor,
    /// Country of residence.
    Country,
    /// US state or Mexican state of residence.
    State,
    /// Airport terminal, with `UNKNOWN` for unresolved derivations.
    Terminal,
    /// Carriers serving the airport.
    Airline,
    /// Half-hour time-of-day bins, starting at 05:00.
    DepartTime,
    /// Purpose of the flight.
    FlightPurpose,
    /// Convention center role.
    ConventionCenterActivity,
    /// Number of checked bags.
    CheckedBags,
    /// Number of carry-on bags.
    CarryOns,
    /// Nights away or nights visited.
    TravelDuration,
    /// Travel party size.
    PartySize,
    /// Airport buildings where employee shifts start.
    SanBuildings,
    /// Employers operating at the airport.
    Employers,
    /// Employee occupations.
    Occupations,
    /// Hours worked in the past seven days.
    HoursWorked,
    /// Days commuted in the past seven days.
    CommuteDays,
    /// Detailed ground-access travel modes.
    TravelMode,
    /// Factors behind choosing a mode.
    CommuteModeDecision,
    /// Reasons for not using transit to or from the airport.
    ReasonsNoTransit,
    /// Grouped travel-mode taxonomy.
    ModeGrouped,
    /// Activity at the non-airport trip end.
    ActivityType,
    /// Where the respondent parked.
    ParkingLocation,
    /// Unit of the reported parking cost.
    ParkingCostFrequency,
    /// Whether ground-access cost is reimbursed.
    ParkingReimbursement,
    /// Flights in the past twelve months.
    SanFlightFrequency,
    /// Days per week transit is used.
    TransitUseFrequency,
    /// Household car availability for the trip.
    CarAvailability,
    /// Age bracket.
    Age,
    /// Gender.
    Gender,
    /// Persons in household.
    HouseholdSize,
    /// Vehicles in household.
    HouseholdVehicles,
    /// Household income bracket.
    HouseholdIncome,
    /// Workers in household.
    HouseholdWorkers,
    /// Self-reported English proficiency.
    EnglishProficiency,
}

impl Vocabulary {
    /// Every code list, in survey order.
    pub const ALL: &'static [Vocabulary] = &[
        Vocabulary::InterviewLocation,
        Vocabulary::InboundOutbound,
        Vocabulary::MarketSegment,
        Vocabulary::PassengerType,
        Vocabulary::ResidentVisitorGeneral,
        Vocabulary::ResidentVisitor,
        Vocabulary::Country,
        Vocabulary::State,
        Vocabulary::Terminal,
        Vocabulary::Airline,
        Vocabulary::DepartTime,
        Vocabulary::FlightPurpose,
        Vocabulary::ConventionCenterActivity,
        Vocabulary::CheckedBags,
        Vocabulary::CarryOns,
        Vocabulary::TravelDuration,
        Vocabulary::PartySize,
        Vocabulary::SanBuildings,
        Vocabulary::Employers,
        Vocabulary::Occupations,
        Vocabulary::HoursWorked,
        Vocabulary::CommuteDays,
        Vocabulary::TravelMode,
        Vocabulary::CommuteModeDecision,
        Vocabulary::ReasonsNoTransit,
        Vocabulary::ModeGrouped,
        Vocabulary::ActivityType,
        Vocabulary::ParkingLocation,
        Vocabulary::ParkingCostFrequency,
        Vocabulary::ParkingReimbursement,
        Vocabulary::SanFlightFrequency,
        Vocabulary::TransitUseFrequency,
        Vocabulary::CarAvailability,
        Vocabulary::Age,
        Vocabulary::Gender,
        Vocabulary::HouseholdSize,
        Vocabulary::HouseholdVehicles,
        Vocabulary::HouseholdIncome,
        Vocabulary::HouseholdWorkers,
        Vocabulary::EnglishProficiency,
    ];

    /// Code list name as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Vocabulary::InterviewLocation => "InterviewLocation",
            Vocabulary::InboundOutbound => "InboundOutbound",
            Vocabulary::MarketSegment => "MarketSegment",
            Vocabulary::PassengerType => "PassengerType",
            Vocabulary::ResidentVisitorGeneral => "ResidentVisitorGeneral",
            Vocabulary::ResidentVisitor => "ResidentVisitor",
            Vocabulary::Country => "Country",
            Vocabulary::State => "State",
            Vocabulary::Terminal => "Terminal",
            Vocabulary::Airline => "Airline",
            Vocabulary::DepartTime => "DepartTime",
            Vocabulary::FlightPurpose => "FlightPurpose",
            Vocabulary::ConventionCenterActivity => "ConventionCenterActivity",
            Vocabulary::CheckedBags => "CheckedBags",
            Vocabulary::CarryOns => "CarryOns",
            Vocabulary::TravelDuration => "TravelDuration",
            Vocabulary::PartySize => "PartySize",
            Vocabulary::SanBuildings => "SanBuildings",
            Vocabulary::Employers => "Employers",
            Vocabulary::Occupations => "Occupations",
            Vocabulary::HoursWorked => "HoursWorked",
            Vocabulary::CommuteDays => "CommuteDays",
            Vocabulary::TravelMode => "TravelMode",
            Vocabulary::CommuteModeDecision => "CommuteModeDecision",
            Vocabulary::ReasonsNoTransit => "ReasonsNoTransit",
            Vocabulary::ModeGrouped => "ModeGrouped",
            Vocabulary::ActivityType => "ActivityType",
            Vocabulary::ParkingLocation => "ParkingLocation",
            Vocabulary::ParkingCostFrequency => "ParkingCostFrequency",
            Vocabulary::ParkingReimbursement => "ParkingReimbursement",
            Vocabulary::SanFlightFrequency => "SanFlightFrequency",
            Vocabulary::TransitUseFrequency => "TransitUseFrequency",
            Vocabulary::CarAvailability => "CarAvailability",
            Vocabulary::Age => "Age",
            Vocabulary::Gender => "Gender",
            Vocabulary::HouseholdSize => "HouseholdSize",
            Vocabulary::HouseholdVehicles => "HouseholdVehicles",
            Vocabulary::HouseholdIncome => "HouseholdIncome",
            Vocabulary::HouseholdWorkers => "HouseholdWorkers",
            Vocabulary::EnglishProficiency => "EnglishProficiency",
        }
    }

    /// All `(code, label)` pairs of this list.
    pub fn codes(self) -> &'static [(i64, &'static str)] {
        match self {
            Vocabulary::InterviewLocation => codes::INTERVIEW_LOCATION,
            Vocabulary::InboundOutbound => codes::INBOUND_OUTBOUND,
            Vocabulary::MarketSegment => codes::MARKET_SEGMENT,
            Vocabulary::PassengerType => codes::PASSENGER_TYPE,
            Vocabulary::ResidentVisitorGeneral => codes::RESIDENT_VISITOR_GENERAL,
            Vocabulary::ResidentVisitor => codes::RESIDENT_VISITOR,
            Vocabulary::Country => codes::COUNTRY,
            Vocabulary::State => codes::STATE,
            Vocabulary::Terminal => codes::TERMINAL,
            Vocabulary::Airline => codes::AIRLINE,
            Vocabulary::DepartTime => codes::DEPART_TIME,
            Vocabulary::FlightPurpose => codes::FLIGHT_PURPOSE,
            Vocabulary::ConventionCenterActivity => codes::CONVENTION_CENTER_ACTIVITY,
            Vocabulary::CheckedBags => codes::CHECKED_BAGS,
            Vocabulary::CarryOns => codes::CARRY_ONS,
            Vocabulary::TravelDuration => codes::TRAVEL_DURATION,
            Vocabulary::PartySize => codes::PARTY_SIZE,
            Vocabulary::SanBuildings => codes::SAN_BUILDINGS,
            Vocabulary::Employers => codes::EMPLOYERS,
            Vocabulary::Occupations => codes::OCCUPATIONS,
            Vocabulary::HoursWorked => codes::HOURS_WORKED,
            Vocabulary::CommuteDays => codes::COMMUTE_DAYS,
            Vocabulary::TravelMode => codes::TRAVEL_MODE,
            Vocabulary::CommuteModeDecision => codes::COMMUTE_MODE_DECISION,
            Vocabulary::ReasonsNoTransit => codes::REASONS_NO_TRANSIT,
            Vocabulary::ModeGrouped => codes::MODE_GROUPED,
            Vocabulary::ActivityType => codes::ACTIVITY_TYPE,
            Vocabulary::ParkingLocation => codes::PARKING_LOCATION,
            Vocabulary::ParkingCostFrequency => codes::PARKING_COST_FREQUENCY,
            Vocabulary::ParkingReimbursement => codes::PARKING_REIMBURSEMENT,
            Vocabulary::SanFlightFrequency => codes::SAN_FLIGHT_FREQUENCY,
            Vocabulary::TransitUseFrequency => codes::TRANSIT_USE_FREQUENCY,
            Vocabulary::CarAvailability => codes::CAR_AVAILABILITY,
            Vocabulary::Age => codes::AGE,
            Vocabulary::Gender => codes::GENDER,
            Vocabulary::HouseholdSize => codes::HOUSEHOLD_SIZE,
            Vocabulary::HouseholdVehicles => codes::HOUSEHOLD_VEHICLES,
            Vocabulary::HouseholdIncome => codes::HOUSEHOLD_INCOME,
            Vocabulary::HouseholdWorkers => codes::HOUSEHOLD_WORKERS,
            Vocabulary::EnglishProficiency => codes::ENGLISH_PROFICIENCY,
        }
    }

    /// Label of `code`, or `None` when the code is outside the list.
    ///
    /// When a list carries an alias for an already-used code the first label wins.
    pub fn label(self, code: i64) -> Option<&'static str> {
        self.codes()
            .iter()
            .find(|(value, _)| *value == code)
            .map(|(_, label)| *label)
    }

    /// Returns true if `code` is a member of this list.
    pub fn contains(self, code: i64) -> bool {
        self.label(code).is_some()
    }

    /// Code carrying `label` (case-insensitive).
    pub fn code_for(self, label: &str) -> Option<i64> {
        let wanted = label.trim();
        self.codes()
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(wanted))
            .map(|(code, _)| *code)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Vocabulary::ALL
            .iter()
            .copied()
            .find(|vocabulary| vocabulary.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown vocabulary: {s}"))
    }
}

/// Well-known codes referenced by derivations and variant resolution.
pub mod known {
    //! Codes with structural meaning outside their own code list.

    /// `MarketSegment::PASSENGER`.
    pub const MARKET_SEGMENT_PASSENGER: i64 = 1;
    /// `MarketSegment::EMPLOYEE`.
    pub const MARKET_SEGMENT_EMPLOYEE: i64 = 2;

    /// `PassengerType::DEPARTING`.
    pub const PASSENGER_DEPARTING: i64 = 1;
    /// `PassengerType::ARRIVING`.
    pub const PASSENGER_ARRIVING: i64 = 2;

    /// `ResidentVisitorGeneral::GOING_HOME_OR_VISITING`.
    pub const RESIDENCY_VISITOR: i64 = 1;
    /// `ResidentVisitorGeneral::LEAVING_HOME_OR_COMING_HOME`.
    pub const RESIDENCY_RESIDENT: i64 = 2;
    /// `ResidentVisitorGeneral::NEITHER`.
    pub const RESIDENCY_NEITHER: i64 = 3;

    /// `InboundOutbound::INBOUND_TO_AIRPORT`.
    pub const INBOUND_TO_AIRPORT: i64 = 1;

    /// `Terminal::TERMINAL_1`.
    pub const TERMINAL_1: i64 = 1;
    /// `Terminal::TERMINAL_2`.
    pub const TERMINAL_2: i64 = 2;
    /// `Terminal::UNKNOWN`.
    pub const TERMINAL_UNKNOWN: i64 = 99;
}
