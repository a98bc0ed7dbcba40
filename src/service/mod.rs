mod aircraft;
mod airport;
mod flight;

pub use aircraft::AircraftService;
pub use airport::AirportService;
pub use flight::{DetailedFlight, FlightService};
