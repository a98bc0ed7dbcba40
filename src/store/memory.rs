use super::{AircraftStore, AirportStore, FlightStore};
use crate::error::{FaultCode, FlightError};
use crate::event;
use crate::model::{Aircraft, Airport, EntityId, Flight};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory stand-in for the relational store.
///
/// Mirrors the guarantees the real database gives the services: assigned
/// identifiers, unique aircraft names, unique airport name/IATA/ICAO, and
/// writes that report whether a row was actually touched. One instance
/// backs all three store seams, like one database context backs all three
/// repositories.
pub struct MemoryStore {
    aircraft: RwLock<Table<Aircraft>>,
    airports: RwLock<Table<Airport>>,
    flights: RwLock<Table<Flight>>,
}

struct Table<T> {
    rows: HashMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: EntityId) -> Option<T> {
        if id <= 0 {
            return None;
        }
        self.rows.get(&id).cloned()
    }

    fn assign_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            aircraft: RwLock::new(Table::new()),
            airports: RwLock::new(Table::new()),
            flights: RwLock::new(Table::new()),
        }
    }

    /// Checks that a flight only references rows that exist, the way the
    /// database foreign keys would.
    async fn check_flight_references(&self, flight: &Flight) -> Result<(), FlightError> {
        let aircraft_known = self.aircraft.read().await.rows.contains_key(&flight.aircraft_id);
        let airports = self.airports.read().await;
        if !aircraft_known
            || !airports.rows.contains_key(&flight.airport_departure_id)
            || !airports.rows.contains_key(&flight.airport_destination_id)
        {
            return Err(FlightError::functional(
                FaultCode::InvalidEntity,
                format!(
                    "the flight references an unknown aircraft ({}) or airport ({}, {})",
                    flight.aircraft_id, flight.airport_departure_id, flight.airport_destination_id
                ),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self { Self::new() }
}

fn sorted_by_id<T: Clone>(table: &Table<T>, id_of: impl Fn(&T) -> EntityId) -> Vec<T> {
    let mut rows: Vec<T> = table.rows.values().cloned().collect();
    rows.sort_by_key(id_of);
    rows
}

fn not_found(entity: &str, id: EntityId) -> FlightError {
    FlightError::functional(
        FaultCode::EntityToDeleteNotFound,
        format!("the {entity} entity with identifier {id} is not found"),
    )
}

fn no_change() -> FlightError {
    FlightError::functional(FaultCode::NoChange, "no change was persisted")
}

fn duplicate(message: &str) -> FlightError {
    FlightError::functional(FaultCode::InvalidEntity, message)
}

#[async_trait]
impl AircraftStore for MemoryStore {
    async fn get(&self, id: EntityId) -> Result<Option<Aircraft>, FlightError> {
        Ok(self.aircraft.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Aircraft>, FlightError> {
        Ok(sorted_by_id(&*self.aircraft.read().await, |a| a.id))
    }

    async fn insert(&self, mut aircraft: Aircraft) -> Result<EntityId, FlightError> {
        let mut table = self.aircraft.write().await;
        if table.rows.values().any(|a| a.name == aircraft.name) {
            return Err(duplicate(
                "an aircraft with the same name already exists, names must be unique",
            ));
        }
        let id = table.assign_id();
        aircraft.id = id;
        table.rows.insert(id, aircraft);
        event!("aircraft {id} inserted");
        Ok(id)
    }

    async fn update(&self, aircraft: Aircraft) -> Result<(), FlightError> {
        let mut table = self.aircraft.write().await;
        if table.rows.values().any(|a| a.id != aircraft.id && a.name == aircraft.name) {
            return Err(duplicate(
                "an aircraft with the same name already exists, names must be unique",
            ));
        }
        if !table.rows.contains_key(&aircraft.id) {
            return Err(no_change());
        }
        event!("aircraft {} updated", aircraft.id);
        table.rows.insert(aircraft.id, aircraft);
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        if id <= 0 {
            return Ok(());
        }
        let mut table = self.aircraft.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(not_found("aircraft", id));
        }
        event!("aircraft {id} deleted");
        Ok(())
    }
}

#[async_trait]
impl AirportStore for MemoryStore {
    async fn get(&self, id: EntityId) -> Result<Option<Airport>, FlightError> {
        Ok(self.airports.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Airport>, FlightError> {
        Ok(sorted_by_id(&*self.airports.read().await, |a| a.id))
    }

    async fn insert(&self, mut airport: Airport) -> Result<EntityId, FlightError> {
        let mut table = self.airports.write().await;
        if table.rows.values().any(|a| collides(a, &airport)) {
            return Err(duplicate(
                "an airport with the same IATA, ICAO or name already exists, they must be unique",
            ));
        }
        let id = table.assign_id();
        airport.id = id;
        table.rows.insert(id, airport);
        event!("airport {id} inserted");
        Ok(id)
    }

    async fn update(&self, airport: Airport) -> Result<(), FlightError> {
        let mut table = self.airports.write().await;
        if table.rows.values().any(|a| a.id != airport.id && collides(a, &airport)) {
            return Err(duplicate(
                "an airport with the same IATA, ICAO or name already exists, they must be unique",
            ));
        }
        if !table.rows.contains_key(&airport.id) {
            return Err(no_change());
        }
        event!("airport {} updated", airport.id);
        table.rows.insert(airport.id, airport);
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        if id <= 0 {
            return Ok(());
        }
        let mut table = self.airports.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(not_found("airport", id));
        }
        event!("airport {id} deleted");
        Ok(())
    }
}

#[async_trait]
impl FlightStore for MemoryStore {
    async fn get(&self, id: EntityId) -> Result<Option<Flight>, FlightError> {
        Ok(self.flights.read().await.get(id))
    }

    async fn list(&self) -> Result<Vec<Flight>, FlightError> {
        Ok(sorted_by_id(&*self.flights.read().await, |f| f.id))
    }

    async fn insert(&self, mut flight: Flight) -> Result<EntityId, FlightError> {
        self.check_flight_references(&flight).await?;
        let mut table = self.flights.write().await;
        let id = table.assign_id();
        flight.id = id;
        table.rows.insert(id, flight);
        event!("flight {id} inserted");
        Ok(id)
    }

    async fn update(&self, flight: Flight) -> Result<(), FlightError> {
        self.check_flight_references(&flight).await?;
        let mut table = self.flights.write().await;
        if !table.rows.contains_key(&flight.id) {
            return Err(no_change());
        }
        event!("flight {} updated", flight.id);
        table.rows.insert(flight.id, flight);
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        if id <= 0 {
            return Ok(());
        }
        let mut table = self.flights.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(not_found("flight", id));
        }
        event!("flight {id} deleted");
        Ok(())
    }
}

// Airports collide on name and, when present, on IATA and ICAO codes.
fn collides(stored: &Airport, candidate: &Airport) -> bool {
    if stored.name == candidate.name {
        return true;
    }
    let same_code = |a: &Option<String>, b: &Option<String>| match (a, b) {
        (Some(a), Some(b)) => !a.is_empty() && a == b,
        _ => false,
    };
    same_code(&stored.iata, &candidate.iata) || same_code(&stored.icao, &candidate.icao)
}
