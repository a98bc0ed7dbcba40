use super::EntityId;
use serde::{Deserialize, Serialize};

/// An aircraft type with the performance figures the fuel estimate needs.
///
/// The numeric fields must all be strictly positive and the name non-empty
/// for the record to be storable. That is enforced at the validation
/// boundary, never inside the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: EntityId,
    pub name: String,
    /// Cruise speed in kilometers per hour.
    pub speed: f64,
    /// Total fuel the tanks hold, in fuel units.
    pub fuel_capacity: f64,
    /// Fuel burnt per flown kilometer at cruise.
    pub fuel_consumption: f64,
    /// Fixed fuel overhead spent on climb and departure, added to every trip.
    pub take_off_effort: f64,
}
