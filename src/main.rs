#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod error;
mod logger;
mod model;
mod planning;
mod service;
mod store;
mod validation;

use crate::error::FlightError;
use crate::model::{Aircraft, Airport, Flight};
use crate::planning::{FlightPlanner, Haversine};
use crate::service::{AircraftService, AirportService, FlightService};
use crate::store::MemoryStore;
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let store = Arc::new(MemoryStore::new());
    let aircraft = AircraftService::new(store.clone());
    let airports = AirportService::new(store.clone());
    let flights = FlightService::new(
        store.clone(),
        store.clone(),
        store,
        FlightPlanner::new(Haversine),
    );

    if let Err(e) = seed(&aircraft, &airports, &flights).await {
        fatal!("Seeding the store failed: {e}");
    }

    match flights.detailed_flights().await {
        Ok(detailed) => {
            for d in detailed {
                let departure = d.flight.departure.map_or("?".to_string(), |a| a.name);
                let destination = d.flight.destination.map_or("?".to_string(), |a| a.name);
                info!(
                    "Flight {}: {departure} -> {destination}, {:.2} km, {:.1} fuel units needed",
                    d.flight.id,
                    d.plan.distance_km(),
                    d.plan.needed_fuel()
                );
            }
        }
        Err(e) => fatal!("Detailing the stored flights failed: {e}"),
    }

    // Writes that violate the business rules come back as functional
    // faults with a stable code, ready for an API layer to map onto a
    // client error.
    let broken_airport = Airport {
        id: 0,
        name: "Nadzab Airport".to_string(),
        city: "Lae".to_string(),
        country_name: "Papua New Guinea".to_string(),
        iata: Some("LA".to_string()),
        icao: Some("AYNZ".to_string()),
        latitude: Some(-6.569803),
        longitude: Some(146.725977),
    };
    if let Err(e) = airports.insert(Some(broken_airport)).await {
        let anomaly = e.to_anomaly();
        warn!("Rejected airport write: [{}] {} ({})", anomaly.code, anomaly.message, anomaly.kind);
    }

    let looping_flight = Flight {
        id: 0,
        aircraft_id: 1,
        airport_departure_id: 1,
        airport_destination_id: 1,
        update_date: None,
    };
    if let Err(e) = flights.insert(Some(looping_flight)).await {
        warn!("Rejected flight write: {e}");
    }

    match flights.detailed_flight(999).await {
        Ok(None) => log!("Flight 999 is not stored, nothing to detail."),
        Ok(Some(_)) => error!("Flight 999 should not exist in the demo store!"),
        Err(e) => error!("Detailing flight 999 failed unexpectedly: {e}"),
    }
}

/// Seeds the demo store with one aircraft and the classic Papua New Guinea
/// pair, then connects them with a flight in each direction.
async fn seed(
    aircraft: &AircraftService,
    airports: &AirportService,
    flights: &FlightService<Haversine>,
) -> Result<(), FlightError> {
    aircraft
        .insert(Some(Aircraft {
            id: 0,
            name: "Dash 8 Q400".to_string(),
            speed: 667.0,
            fuel_capacity: 6526.0,
            fuel_consumption: 8.2,
            take_off_effort: 300.0,
        }))
        .await?;

    airports
        .insert(Some(Airport {
            id: 0,
            name: "Goroka Airport".to_string(),
            city: "Goroka".to_string(),
            country_name: "Papua New Guinea".to_string(),
            iata: Some("GKA".to_string()),
            icao: Some("AYGA".to_string()),
            latitude: Some(-5.826789855957031),
            longitude: Some(144.29600524902344),
        }))
        .await?;
    airports
        .insert(Some(Airport {
            id: 0,
            name: "Madang Airport".to_string(),
            city: "Madang".to_string(),
            country_name: "Papua New Guinea".to_string(),
            iata: Some("MAG".to_string()),
            icao: Some("AYMD".to_string()),
            latitude: Some(-6.081689834590001),
            longitude: Some(145.391998291),
        }))
        .await?;

    let craft = aircraft.list().await?[0].id;
    let stored = airports.list().await?;
    let (goroka, madang) = (stored[0].id, stored[1].id);

    for (departure, destination) in [(goroka, madang), (madang, goroka)] {
        flights
            .insert(Some(Flight {
                id: 0,
                aircraft_id: craft,
                airport_departure_id: departure,
                airport_destination_id: destination,
                update_date: None,
            }))
            .await?;
    }

    log!("Seeded {} airports and {} flights.", stored.len(), flights.list().await?.len());
    Ok(())
}
