use super::{validate_aircraft, validate_airport, validate_flight};
use crate::error::FaultCode;
use crate::model::{Aircraft, Airport, Flight};

fn valid_aircraft() -> Aircraft {
    Aircraft {
        id: 1,
        name: "Dash 8 Q400".to_string(),
        speed: 99.0,
        fuel_capacity: 99.0,
        fuel_consumption: 99.0,
        take_off_effort: 99.0,
    }
}

fn valid_airport() -> Airport {
    Airport {
        id: 1,
        name: "Goroka Airport".to_string(),
        city: "Goroka".to_string(),
        country_name: "Papua New Guinea".to_string(),
        iata: Some("GKA".to_string()),
        icao: Some("AYGA".to_string()),
        latitude: Some(-5.826789855957031),
        longitude: Some(144.29600524902344),
    }
}

fn flight(departure: i32, destination: i32) -> Flight {
    Flight {
        id: 1,
        aircraft_id: 1,
        airport_departure_id: departure,
        airport_destination_id: destination,
        update_date: None,
    }
}

#[test]
fn a_valid_aircraft_passes() {
    assert!(validate_aircraft(&valid_aircraft()).is_ok());
}

#[test]
fn each_broken_aircraft_rule_fails() {
    let broken: [fn(&mut Aircraft); 6] = [
        |a| a.name.clear(),
        |a| a.fuel_capacity = 0.0,
        |a| a.fuel_consumption = -1.0,
        |a| a.speed = 0.0,
        |a| a.take_off_effort = -0.5,
        |a| a.fuel_capacity = -99.0,
    ];
    for break_rule in broken {
        let mut aircraft = valid_aircraft();
        break_rule(&mut aircraft);
        let err = validate_aircraft(&aircraft).unwrap_err();
        assert!(err.is_functional());
        assert_eq!(err.code(), FaultCode::InvalidEntity);
    }
}

#[test]
fn a_valid_airport_passes() {
    assert!(validate_airport(&valid_airport()).is_ok());
}

#[test]
fn airports_without_codes_pass() {
    let mut airport = valid_airport();
    airport.iata = None;
    airport.icao = None;
    assert!(validate_airport(&airport).is_ok());

    // Empty codes count as absent, not as wrong-length codes.
    airport.iata = Some(String::new());
    airport.icao = Some(String::new());
    assert!(validate_airport(&airport).is_ok());
}

#[test]
fn each_broken_airport_rule_fails() {
    let broken: [fn(&mut Airport); 9] = [
        |a| a.name.clear(),
        |a| a.country_name.clear(),
        |a| a.iata = Some("AB".to_string()),
        |a| a.iata = Some("ABCD".to_string()),
        |a| a.icao = Some("AYG".to_string()),
        |a| a.latitude = None,
        |a| a.latitude = Some(95.0),
        |a| a.longitude = None,
        |a| a.longitude = Some(-180.5),
    ];
    for break_rule in broken {
        let mut airport = valid_airport();
        break_rule(&mut airport);
        let err = validate_airport(&airport).unwrap_err();
        assert!(err.is_functional());
        assert_eq!(err.code(), FaultCode::InvalidEntity);
    }
}

#[test]
fn boundary_coordinates_pass() {
    for (latitude, longitude) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
        let mut airport = valid_airport();
        airport.latitude = Some(latitude);
        airport.longitude = Some(longitude);
        assert!(validate_airport(&airport).is_ok());
    }
}

#[test]
fn a_flight_between_different_airports_passes() {
    assert!(validate_flight(&flight(1, 2)).is_ok());
}

#[test]
fn a_flight_looping_on_one_airport_fails_with_both_ids() {
    let err = validate_flight(&flight(7, 7)).unwrap_err();
    assert!(err.is_functional());
    assert_eq!(err.code(), FaultCode::SameDepartureAndDestination);
    assert!(err.message().matches('7').count() >= 2);
}
