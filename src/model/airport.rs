use super::EntityId;
use serde::{Deserialize, Serialize};

/// A stored airport with its geographic position.
///
/// Latitude and longitude are optional at the type level. Write validation
/// requires both to be present and in range, and the plan composer refuses
/// to compute without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub country_name: String,
    /// 3-letter IATA code, when the airport has one.
    pub iata: Option<String>,
    /// 4-letter ICAO code, when the airport has one.
    pub icao: Option<String>,
    /// Decimal degrees in [-90, 90].
    pub latitude: Option<f64>,
    /// Decimal degrees in [-180, 180].
    pub longitude: Option<f64>,
}
