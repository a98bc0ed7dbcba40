use crate::error::FlightError;
use crate::model::{Aircraft, EntityId};
use crate::store::AircraftStore;
use crate::validation;
use std::sync::Arc;

/// CRUD orchestration for aircraft records.
///
/// Validates before every write. Reads pass through to the store.
pub struct AircraftService {
    store: Arc<dyn AircraftStore>,
}

impl AircraftService {
    pub fn new(store: Arc<dyn AircraftStore>) -> Self { Self { store } }

    pub async fn get(&self, id: EntityId) -> Result<Option<Aircraft>, FlightError> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Aircraft>, FlightError> { self.store.list().await }

    /// Inserting nothing is a no-op, inserting an invalid aircraft is an
    /// error. The two outcomes must stay distinguishable.
    pub async fn insert(&self, aircraft: Option<Aircraft>) -> Result<(), FlightError> {
        let Some(aircraft) = aircraft else {
            return Ok(());
        };
        validation::validate_aircraft(&aircraft)?;
        self.store.insert(aircraft).await.map(|_| ())
    }

    pub async fn update(&self, aircraft: Option<Aircraft>) -> Result<(), FlightError> {
        let Some(aircraft) = aircraft else {
            return Ok(());
        };
        validation::validate_aircraft(&aircraft)?;
        self.store.update(aircraft).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        self.store.delete(id).await
    }
}
