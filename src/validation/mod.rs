//! Write-side gate keeping for the three stored entities.
//!
//! Pure synchronous predicates, no I/O. The services run these before any
//! store write, on both the insert and the update path.

use crate::error::{FaultCode, FlightError};
use crate::model::{Aircraft, Airport, Flight};

#[cfg(test)]
mod tests;

/// Checks the performance figures of an aircraft before it is persisted.
///
/// All four numeric fields must be strictly positive and the name must not
/// be empty, otherwise the record is useless to the fuel estimate.
pub fn validate_aircraft(aircraft: &Aircraft) -> Result<(), FlightError> {
    if aircraft.name.is_empty()
        || aircraft.fuel_capacity <= 0.0
        || aircraft.fuel_consumption <= 0.0
        || aircraft.speed <= 0.0
        || aircraft.take_off_effort <= 0.0
    {
        return Err(FlightError::functional(
            FaultCode::InvalidEntity,
            "the aircraft entity is invalid",
        ));
    }
    Ok(())
}

/// Checks an airport before it is persisted.
///
/// Name and country are required, IATA/ICAO codes must have their standard
/// length when present, and both coordinates must be present and in range.
pub fn validate_airport(airport: &Airport) -> Result<(), FlightError> {
    if airport.name.is_empty()
        || airport.country_name.is_empty()
        || !code_length_ok(airport.iata.as_deref(), 3)
        || !code_length_ok(airport.icao.as_deref(), 4)
        || !in_range(airport.latitude, -90.0, 90.0)
        || !in_range(airport.longitude, -180.0, 180.0)
    {
        return Err(FlightError::functional(
            FaultCode::InvalidEntity,
            "the airport entity is invalid",
        ));
    }
    Ok(())
}

/// Structural rule for flights: a leg may not start and end at the same
/// airport.
pub fn validate_flight(flight: &Flight) -> Result<(), FlightError> {
    if flight.airport_departure_id == flight.airport_destination_id {
        return Err(FlightError::functional(
            FaultCode::SameDepartureAndDestination,
            format!(
                "the departure airport {} and the destination airport {} of a flight must differ",
                flight.airport_departure_id, flight.airport_destination_id
            ),
        ));
    }
    Ok(())
}

// An empty code counts as absent, matching how the upstream forms submit it.
fn code_length_ok(code: Option<&str>, expected: usize) -> bool {
    match code {
        Some(c) if !c.is_empty() => c.chars().count() == expected,
        _ => true,
    }
}

fn in_range(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_some_and(|v| (min..=max).contains(&v))
}
