use crate::error::FlightError;
use crate::model::Aircraft;

/// Estimates the total fuel needed for a one-leg trip.
///
/// A zero distance or a zero-speed aircraft is a degenerate no-trip case
/// and yields exactly zero. Both are checked before the duration division,
/// so a zero-speed aircraft never divides by zero. An absent aircraft
/// reference is a precondition violation and reported as a technical fault.
///
/// The estimate is quadratic in distance on purpose: consumption scales
/// with the distance and with the flight duration, which itself grows with
/// distance. Callers rely on these exact figures.
///
/// # Arguments
/// - `distance_km`: non-negative trip distance in kilometers.
/// - `aircraft`: the resolved aircraft flying the leg.
///
/// # Returns
/// The needed fuel in the same unit as the aircraft fuel capacity.
pub fn needed_fuel(distance_km: f64, aircraft: Option<&Aircraft>) -> Result<f64, FlightError> {
    let aircraft = aircraft.ok_or_else(|| FlightError::missing_argument("aircraft"))?;

    if distance_km == 0.0 || aircraft.speed == 0.0 {
        return Ok(0.0);
    }

    let flight_duration = distance_km / aircraft.speed;
    Ok(aircraft.fuel_consumption * distance_km * flight_duration + aircraft.take_off_effort)
}
