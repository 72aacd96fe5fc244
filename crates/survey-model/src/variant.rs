//! The nine concrete respondent variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VariantError;
use crate::schema::GroupId;
use crate::vocabulary::known;

/// Direction of an air passenger relative to the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Departing,
    Arriving,
}

impl Direction {
    /// Passenger-type code that selects this direction.
    pub fn passenger_type_code(self) -> i64 {
        match self {
            Direction::Departing => known::PASSENGER_DEPARTING,
            Direction::Arriving => known::PASSENGER_ARRIVING,
        }
    }

    pub fn from_passenger_type(code: i64) -> Option<Self> {
        match code {
            known::PASSENGER_DEPARTING => Some(Direction::Departing),
            known::PASSENGER_ARRIVING => Some(Direction::Arriving),
            _ => None,
        }
    }
}

/// Residency of an air passenger relative to the service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residency {
    Resident,
    Visitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    Employee,
    ArrivingAirPassenger,
    DepartingAirPassenger,
    Resident,
    Visitor,
    DepartingPassengerResident,
    DepartingPassengerVisitor,
    ArrivingPassengerResident,
    ArrivingPassengerVisitor,
}

use GroupId::{
    AirPassengerFields, ArrivingFields, BaseRespondent, DepartingFields, DepartingResidentFields,
    EmployeeFields, ResidentFields, Trip, VisitorFields,
};

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Employee,
        Variant::ArrivingAirPassenger,
        Variant::DepartingAirPassenger,
        Variant::Resident,
        Variant::Visitor,
        Variant::DepartingPassengerResident,
        Variant::DepartingPassengerVisitor,
        Variant::ArrivingPassengerResident,
        Variant::ArrivingPassengerVisitor,
    ];

    /// Class name used by the rule table.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Employee => "Employee",
            Variant::ArrivingAirPassenger => "ArrivingAirPassenger",
            Variant::DepartingAirPassenger => "DepartingAirPassenger",
            Variant::Resident => "Resident",
            Variant::Visitor => "Visitor",
            Variant::DepartingPassengerResident => "DepartingPassengerResident",
            Variant::DepartingPassengerVisitor => "DepartingPassengerVisitor",
            Variant::ArrivingPassengerResident => "ArrivingPassengerResident",
            Variant::ArrivingPassengerVisitor => "ArrivingPassengerVisitor",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Field groups composing this variant, in union order.
    pub fn groups(self) -> &'static [GroupId] {
        match self {
            Variant::Employee => &[BaseRespondent, Trip, EmployeeFields],
            Variant::ArrivingAirPassenger => &[BaseRespondent, Trip, AirPassengerFields, ArrivingFields],
            Variant::DepartingAirPassenger => {
                &[BaseRespondent, Trip, AirPassengerFields, DepartingFields]
            }
            Variant::Resident => &[BaseRespondent, Trip, AirPassengerFields, ResidentFields],
            Variant::Visitor => &[BaseRespondent, Trip, AirPassengerFields, VisitorFields],
            Variant::DepartingPassengerResident => &[
                BaseRespondent,
                Trip,
                AirPassengerFields,
                DepartingFields,
                ResidentFields,
                DepartingResidentFields,
            ],
            Variant::DepartingPassengerVisitor => &[
                BaseRespondent,
                Trip,
                AirPassengerFields,
                DepartingFields,
                VisitorFields,
            ],
            Variant::ArrivingPassengerResident => &[
                BaseRespondent,
                Trip,
                AirPassengerFields,
                ArrivingFields,
                ResidentFields,
            ],
            Variant::ArrivingPassengerVisitor => &[
                BaseRespondent,
                Trip,
                AirPassengerFields,
                ArrivingFields,
                VisitorFields,
            ],
        }
    }

    /// Field-name collisions and the group that wins them.
    pub fn precedence(self) -> &'static [(&'static str, GroupId)] {
        match self {
            Variant::Employee => &[("trip_start_time", EmployeeFields)],
            Variant::DepartingAirPassenger
            | Variant::DepartingPassengerResident
            | Variant::DepartingPassengerVisitor => &[("trip_start_time", DepartingFields)],
            _ => &[],
        }
    }

    pub fn precedence_for(self, field: &str) -> Option<GroupId> {
        self.precedence()
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, group)| *group)
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Variant::ArrivingAirPassenger
            | Variant::ArrivingPassengerResident
            | Variant::ArrivingPassengerVisitor => Some(Direction::Arriving),
            Variant::DepartingAirPassenger
            | Variant::DepartingPassengerResident
            | Variant::DepartingPassengerVisitor => Some(Direction::Departing),
            _ => None,
        }
    }

    pub fn residency(self) -> Option<Residency> {
        match self {
            Variant::Resident
            | Variant::DepartingPassengerResident
            | Variant::ArrivingPassengerResident => Some(Residency::Resident),
            Variant::Visitor
            | Variant::DepartingPassengerVisitor
            | Variant::ArrivingPassengerVisitor => Some(Residency::Visitor),
            _ => None,
        }
    }

    pub fn is_air_passenger(self) -> bool {
        self != Variant::Employee
    }

    /// Air-passenger variant for a direction/residency pair.
    pub fn compose(direction: Option<Direction>, residency: Option<Residency>) -> Option<Self> {
        use Direction::{Arriving, Departing};
        use Residency::{Resident, Visitor};
        match (direction, residency) {
            (Some(Departing), Some(Resident)) => Some(Variant::DepartingPassengerResident),
            (Some(Departing), Some(Visitor)) => Some(Variant::DepartingPassengerVisitor),
            (Some(Arriving), Some(Resident)) => Some(Variant::ArrivingPassengerResident),
            (Some(Arriving), Some(Visitor)) => Some(Variant::ArrivingPassengerVisitor),
            (Some(Departing), None) => Some(Variant::DepartingAirPassenger),
            (Some(Arriving), None) => Some(Variant::ArrivingAirPassenger),
            (None, Some(Resident)) => Some(Variant::Resident),
            (None, Some(Visitor)) => Some(Variant::Visitor),
            (None, None) => None,
        }
    }

    /// Chooses the concrete variant from the screener codes.
    ///
    /// A residency answer of "neither" defers to the follow-up question
    /// (true means visitor).
    pub fn resolve(
        market_segment: Option<i64>,
        passenger_type: Option<i64>,
        resident_visitor_general: Option<i64>,
        resident_visitor_followup: Option<bool>,
    ) -> Result<Self, VariantError> {
        let unresolved = || VariantError::Unresolved {
            market_segment,
            passenger_type,
            residency: resident_visitor_general,
        };
        match market_segment {
            Some(known::MARKET_SEGMENT_EMPLOYEE) => Ok(Variant::Employee),
            Some(known::MARKET_SEGMENT_PASSENGER) => {
                let direction = passenger_type.and_then(Direction::from_passenger_type);
                let residency = match resident_visitor_general {
                    Some(known::RESIDENCY_VISITOR) => Some(Residency::Visitor),
                    Some(known::RESIDENCY_RESIDENT) => Some(Residency::Resident),
                    Some(known::RESIDENCY_NEITHER) => {
                        resident_visitor_followup.map(|visitor| {
                            if visitor {
                                Residency::Visitor
                            } else {
                                Residency::Resident
                            }
                        })
                    }
                    _ => None,
                };
                Self::compose(direction, residency).ok_or_else(unresolved)
            }
            _ => Err(unresolved()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == trimmed)
            .ok_or_else(|| VariantError::Unknown(trimmed.to_string()))
    }
}
