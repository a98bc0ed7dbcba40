mod memory;

pub use memory::MemoryStore;

use crate::error::FlightError;
use crate::model::{Aircraft, Airport, EntityId, Flight};
use async_trait::async_trait;

#[cfg(test)]
mod tests;

/// Persistence seam for aircraft records.
///
/// `insert` assigns and returns the new identifier. `get` resolves unknown
/// and non-positive ids to `None` rather than an error.
#[async_trait]
pub trait AircraftStore: Send + Sync {
    async fn get(&self, id: EntityId) -> Result<Option<Aircraft>, FlightError>;
    async fn list(&self) -> Result<Vec<Aircraft>, FlightError>;
    async fn insert(&self, aircraft: Aircraft) -> Result<EntityId, FlightError>;
    async fn update(&self, aircraft: Aircraft) -> Result<(), FlightError>;
    async fn delete(&self, id: EntityId) -> Result<(), FlightError>;
}

/// Persistence seam for airport records.
#[async_trait]
pub trait AirportStore: Send + Sync {
    async fn get(&self, id: EntityId) -> Result<Option<Airport>, FlightError>;
    async fn list(&self) -> Result<Vec<Airport>, FlightError>;
    async fn insert(&self, airport: Airport) -> Result<EntityId, FlightError>;
    async fn update(&self, airport: Airport) -> Result<(), FlightError>;
    async fn delete(&self, id: EntityId) -> Result<(), FlightError>;
}

/// Persistence seam for flight records.
#[async_trait]
pub trait FlightStore: Send + Sync {
    async fn get(&self, id: EntityId) -> Result<Option<Flight>, FlightError>;
    async fn list(&self) -> Result<Vec<Flight>, FlightError>;
    async fn insert(&self, flight: Flight) -> Result<EntityId, FlightError>;
    async fn update(&self, flight: Flight) -> Result<(), FlightError>;
    async fn delete(&self, id: EntityId) -> Result<(), FlightError>;
}
