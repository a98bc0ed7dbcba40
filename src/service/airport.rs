use crate::error::FlightError;
use crate::model::{Airport, EntityId};
use crate::store::AirportStore;
use crate::validation;
use std::sync::Arc;

/// CRUD orchestration for airport records, the counterpart of
/// [`AircraftService`](super::AircraftService) for the other master entity.
pub struct AirportService {
    store: Arc<dyn AirportStore>,
}

impl AirportService {
    pub fn new(store: Arc<dyn AirportStore>) -> Self { Self { store } }

    pub async fn get(&self, id: EntityId) -> Result<Option<Airport>, FlightError> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Airport>, FlightError> { self.store.list().await }

    pub async fn insert(&self, airport: Option<Airport>) -> Result<(), FlightError> {
        let Some(airport) = airport else {
            return Ok(());
        };
        validation::validate_airport(&airport)?;
        self.store.insert(airport).await.map(|_| ())
    }

    pub async fn update(&self, airport: Option<Airport>) -> Result<(), FlightError> {
        let Some(airport) = airport else {
            return Ok(());
        };
        validation::validate_airport(&airport)?;
        self.store.update(airport).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        self.store.delete(id).await
    }
}
