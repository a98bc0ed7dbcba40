use crate::error::FlightError;
use crate::model::{EntityId, Flight, ResolvedFlight};
use crate::planning::{DistanceModel, FlightPlan, FlightPlanner};
use crate::store::{AircraftStore, AirportStore, FlightStore};
use crate::validation;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

/// Detail view of one flight: the resolved flight plus its freshly
/// computed plan.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedFlight {
    pub flight: ResolvedFlight,
    pub plan: FlightPlan,
}

/// CRUD orchestration for flights plus the plan computation on top.
///
/// Owns the planner and the three store seams it needs to resolve a
/// flight's references before composing a plan.
pub struct FlightService<D: DistanceModel> {
    store: Arc<dyn FlightStore>,
    aircraft_store: Arc<dyn AircraftStore>,
    airport_store: Arc<dyn AirportStore>,
    planner: FlightPlanner<D>,
}

impl<D: DistanceModel> FlightService<D> {
    pub fn new(
        store: Arc<dyn FlightStore>,
        aircraft_store: Arc<dyn AircraftStore>,
        airport_store: Arc<dyn AirportStore>,
        planner: FlightPlanner<D>,
    ) -> Self {
        Self {
            store,
            aircraft_store,
            airport_store,
            planner,
        }
    }

    pub async fn get(&self, id: EntityId) -> Result<Option<Flight>, FlightError> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Flight>, FlightError> { self.store.list().await }

    /// Validates the structural rule and stamps the write date before the
    /// store sees the flight. A `None` flight is a silent no-op.
    pub async fn insert(&self, flight: Option<Flight>) -> Result<(), FlightError> {
        let Some(mut flight) = flight else {
            return Ok(());
        };
        validation::validate_flight(&flight)?;
        flight.update_date = Some(Utc::now());
        self.store.insert(flight).await.map(|_| ())
    }

    pub async fn update(&self, flight: Option<Flight>) -> Result<(), FlightError> {
        let Some(mut flight) = flight else {
            return Ok(());
        };
        validation::validate_flight(&flight)?;
        flight.update_date = Some(Utc::now());
        self.store.update(flight).await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), FlightError> {
        self.store.delete(id).await
    }

    /// Looks up the aircraft and both airports of a stored flight.
    ///
    /// References that no longer resolve stay `None`; the planner decides
    /// what that means for the computation.
    pub async fn resolve(&self, flight: &Flight) -> Result<ResolvedFlight, FlightError> {
        let aircraft = self.aircraft_store.get(flight.aircraft_id).await?;
        let departure = self.airport_store.get(flight.airport_departure_id).await?;
        let destination = self.airport_store.get(flight.airport_destination_id).await?;
        Ok(ResolvedFlight {
            id: flight.id,
            aircraft,
            departure,
            destination,
            update_date: flight.update_date,
        })
    }

    /// Detail view of one flight.
    ///
    /// An unknown flight id yields `Ok(None)` before any reference is
    /// touched. A stored flight whose references no longer resolve is a
    /// technical fault raised by the planner.
    pub async fn detailed_flight(&self, id: EntityId) -> Result<Option<DetailedFlight>, FlightError> {
        let Some(flight) = self.store.get(id).await? else {
            return Ok(None);
        };
        self.detail(flight).await.map(Some)
    }

    /// Detail view of every stored flight, each plan computed fresh.
    pub async fn detailed_flights(&self) -> Result<Vec<DetailedFlight>, FlightError> {
        let mut detailed = Vec::new();
        for flight in self.store.list().await? {
            detailed.push(self.detail(flight).await?);
        }
        Ok(detailed)
    }

    async fn detail(&self, flight: Flight) -> Result<DetailedFlight, FlightError> {
        let resolved = self.resolve(&flight).await?;
        let plan = self.planner.plan(
            resolved.departure.as_ref(),
            resolved.destination.as_ref(),
            resolved.aircraft.as_ref(),
        )?;
        Ok(DetailedFlight {
            flight: resolved,
            plan,
        })
    }
}
