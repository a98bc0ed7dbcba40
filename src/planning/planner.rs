use super::distance::DistanceModel;
use super::fuel::needed_fuel;
use crate::error::FlightError;
use crate::model::{Aircraft, Airport};
use serde::Serialize;

/// Result of a flight plan computation.
///
/// Never stored, computed fresh on every detail read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightPlan {
    distance_km: f64,
    needed_fuel: f64,
}

impl FlightPlan {
    pub fn distance_km(&self) -> f64 { self.distance_km }

    pub fn needed_fuel(&self) -> f64 { self.needed_fuel }
}

/// Composes the distance model and the fuel estimate for resolved flights.
///
/// Does no data access. Callers resolve the airports and the aircraft
/// first and hand them over; anything still unresolved at this point is an
/// integration bug upstream and surfaces as a technical fault.
pub struct FlightPlanner<D: DistanceModel> {
    distance_model: D,
}

impl<D: DistanceModel> FlightPlanner<D> {
    pub fn new(distance_model: D) -> Self { Self { distance_model } }

    /// Distance between two resolved airports under the injected model.
    ///
    /// Both airports and all four coordinate values must be present.
    pub fn distance_between(
        &self,
        departure: Option<&Airport>,
        destination: Option<&Airport>,
    ) -> Result<f64, FlightError> {
        let (Some(dep), Some(dest)) = (departure, destination) else {
            return Err(FlightError::missing_argument(
                "departure or destination airport",
            ));
        };
        match (dep.latitude, dep.longitude, dest.latitude, dest.longitude) {
            (Some(lat_1), Some(lon_1), Some(lat_2), Some(lon_2)) => {
                Ok(self.distance_model.distance_km(lat_1, lon_1, lat_2, lon_2))
            }
            _ => Err(FlightError::missing_argument(format!(
                "coordinates of airport {} or airport {}",
                dep.id, dest.id
            ))),
        }
    }

    /// Distance plus fuel for one leg, packaged as a [`FlightPlan`].
    pub fn plan(
        &self,
        departure: Option<&Airport>,
        destination: Option<&Airport>,
        aircraft: Option<&Aircraft>,
    ) -> Result<FlightPlan, FlightError> {
        let distance_km = self.distance_between(departure, destination)?;
        let fuel = needed_fuel(distance_km, aircraft)?;
        Ok(FlightPlan {
            distance_km,
            needed_fuel: fuel,
        })
    }
}
