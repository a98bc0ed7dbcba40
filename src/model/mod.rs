mod aircraft;
mod airport;
mod flight;

pub type EntityId = i32;

pub use aircraft::Aircraft;
pub use airport::Airport;
pub use flight::{Flight, ResolvedFlight};
