use super::{Aircraft, Airport, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single-leg flight connecting two stored airports with one aircraft.
///
/// Departure and destination must reference different airports. The stamp
/// in `update_date` is set by the flight service on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: EntityId,
    pub aircraft_id: EntityId,
    pub airport_departure_id: EntityId,
    pub airport_destination_id: EntityId,
    pub update_date: Option<DateTime<Utc>>,
}

/// A flight with its referenced entities looked up.
///
/// References that did not resolve stay `None`. The planner treats an
/// unresolved reference as a caller-side integration fault, so downstream
/// code never dereferences blindly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFlight {
    pub id: EntityId,
    pub aircraft: Option<Aircraft>,
    pub departure: Option<Airport>,
    pub destination: Option<Airport>,
    pub update_date: Option<DateTime<Utc>>,
}
