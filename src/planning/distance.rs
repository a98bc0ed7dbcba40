/// Distance model between two latitude/longitude points in decimal degrees.
///
/// The seam exists so the plan composer stays testable against a fixed
/// distance, the same way the store traits isolate the services.
pub trait DistanceModel {
    /// Computes the distance in kilometers between two points.
    ///
    /// # Arguments
    /// - `lat_1`, `lon_1`: position of the first point in decimal degrees.
    /// - `lat_2`, `lon_2`: position of the second point in decimal degrees.
    ///
    /// # Returns
    /// A non-negative distance in kilometers.
    fn distance_km(&self, lat_1: f64, lon_1: f64, lat_2: f64, lon_2: f64) -> f64;
}

/// Equatorial Earth radius in kilometers.
const EQUATORIAL_EARTH_RADIUS_KM: f64 = 6378.1370;

/// Great-circle distance via the Haversine formula.
///
/// Inputs are not range-checked here. Out-of-range degrees yield a
/// mathematically defined but physically meaningless distance, never an
/// error. Identical points yield exactly zero and the formula is symmetric
/// in the two points by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceModel for Haversine {
    fn distance_km(&self, lat_1: f64, lon_1: f64, lat_2: f64, lon_2: f64) -> f64 {
        let d_lat = (lat_2 - lat_1).to_radians();
        let d_lon = (lon_2 - lon_1).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat_1.to_radians().cos() * lat_2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EQUATORIAL_EARTH_RADIUS_KM * c
    }
}
