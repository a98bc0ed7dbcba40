use super::{AircraftStore, AirportStore, FlightStore, MemoryStore};
use crate::error::FaultCode;
use crate::model::{Aircraft, Airport, Flight};

fn aircraft(name: &str) -> Aircraft {
    Aircraft {
        id: 0,
        name: name.to_string(),
        speed: 600.0,
        fuel_capacity: 2000.0,
        fuel_consumption: 20.0,
        take_off_effort: 50.0,
    }
}

fn airport(name: &str, iata: &str) -> Airport {
    Airport {
        id: 0,
        name: name.to_string(),
        city: "Goroka".to_string(),
        country_name: "Papua New Guinea".to_string(),
        iata: Some(iata.to_string()),
        icao: None,
        latitude: Some(-5.8),
        longitude: Some(144.3),
    }
}

fn flight(aircraft_id: i32, departure: i32, destination: i32) -> Flight {
    Flight {
        id: 0,
        aircraft_id,
        airport_departure_id: departure,
        airport_destination_id: destination,
        update_date: None,
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let store = MemoryStore::new();
    let first = AircraftStore::insert(&store, aircraft("One")).await.unwrap();
    let second = AircraftStore::insert(&store, aircraft("Two")).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let listed = AircraftStore::list(&store).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "One");
}

#[tokio::test]
async fn get_resolves_unknown_and_non_positive_ids_to_none() {
    let store = MemoryStore::new();
    assert!(AircraftStore::get(&store, 17).await.unwrap().is_none());
    assert!(AircraftStore::get(&store, 0).await.unwrap().is_none());
    assert!(AircraftStore::get(&store, -3).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_aircraft_names_are_rejected() {
    let store = MemoryStore::new();
    AircraftStore::insert(&store, aircraft("Dash 8")).await.unwrap();
    let err = AircraftStore::insert(&store, aircraft("Dash 8")).await.unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::InvalidEntity);
}

#[tokio::test]
async fn duplicate_airport_codes_are_rejected() {
    let store = MemoryStore::new();
    AirportStore::insert(&store, airport("Goroka Airport", "GKA")).await.unwrap();
    let err = AirportStore::insert(&store, airport("Madang Airport", "GKA"))
        .await
        .unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::InvalidEntity);
}

#[tokio::test]
async fn updating_an_unknown_row_reports_no_change() {
    let store = MemoryStore::new();
    let mut craft = aircraft("Ghost");
    craft.id = 99;
    let err = AircraftStore::update(&store, craft).await.unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::NoChange);
}

#[tokio::test]
async fn deleting_an_unknown_row_reports_not_found() {
    let store = MemoryStore::new();
    let err = AirportStore::delete(&store, 42).await.unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::EntityToDeleteNotFound);
    assert!(err.message().contains("42"));
    assert!(err.message().contains("airport"));

    // Non-positive ids are silently ignored, there is nothing to report on.
    assert!(AirportStore::delete(&store, 0).await.is_ok());
}

#[tokio::test]
async fn flights_only_reference_existing_rows() {
    let store = MemoryStore::new();
    let craft = AircraftStore::insert(&store, aircraft("Dash 8")).await.unwrap();
    let goroka = AirportStore::insert(&store, airport("Goroka Airport", "GKA")).await.unwrap();
    let madang = AirportStore::insert(&store, airport("Madang Airport", "MAG")).await.unwrap();

    let id = FlightStore::insert(&store, flight(craft, goroka, madang)).await.unwrap();
    assert!(FlightStore::get(&store, id).await.unwrap().is_some());

    let err = FlightStore::insert(&store, flight(craft, goroka, 99)).await.unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::InvalidEntity);

    let err = FlightStore::insert(&store, flight(99, goroka, madang)).await.unwrap_err();
    assert_eq!(err.code(), FaultCode::InvalidEntity);
}
