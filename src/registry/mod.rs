//! # Airline Registry Module
//!
//! In-memory mapping from airline name to its ordered flight sequence.
//!
//! - Airlines keep insertion order (seed order, then creation order)
//! - Flights keep insertion order; deletion shifts later flights down
//! - Flight numbers are not unique; every lookup takes the first match

pub mod errors;
pub mod flight;
pub mod store;

pub use errors::{RegistryError, RegistryResult};
pub use flight::Flight;
pub use store::{Airline, AirlineRegistry};
