//! # Registry Store
//!
//! The registry owns every airline and its flights. Server instances hold
//! one registry each, so tests get a fresh, seeded registry per router.

use tracing::{debug, info};

use super::errors::{RegistryError, RegistryResult};
use super::flight::Flight;

/// An airline and its flights in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airline {
    pub name: String,
    pub flights: Vec<Flight>,
}

impl Airline {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flights: Vec::new(),
        }
    }

    /// Index of the first flight with this number
    pub fn position(&self, flight_num: &str) -> Option<usize> {
        self.flights.iter().position(|f| f.flight_num == flight_num)
    }

    /// First flight with this number
    pub fn find(&self, flight_num: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.flight_num == flight_num)
    }
}

/// Ordered mapping from airline name to flight sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirlineRegistry {
    airlines: Vec<Airline>,
}

impl AirlineRegistry {
    /// Create a registry holding the standard seed: Delta, Southwest and
    /// Alaska with two flights each.
    pub fn new() -> Self {
        let seed = [
            (
                "Delta",
                [Flight::new("DL1234", 54, 180), Flight::new("DL5678", 30, 79)],
            ),
            (
                "Southwest",
                [Flight::new("SWA3298", 45, 122), Flight::new("SWA8002", 73, 150)],
            ),
            (
                "Alaska",
                [Flight::new("AS900", 60, 140), Flight::new("AS7230", 68, 135)],
            ),
        ];

        let airlines = seed
            .into_iter()
            .map(|(name, flights)| Airline {
                name: name.to_string(),
                flights: flights.to_vec(),
            })
            .collect();

        Self { airlines }
    }

    /// Create a registry with no airlines
    pub fn empty() -> Self {
        Self::default()
    }

    /// Airline names in registry order
    pub fn list_airlines(&self) -> Vec<String> {
        self.airlines.iter().map(|a| a.name.clone()).collect()
    }

    /// Flight numbers of one airline in sequence order.
    ///
    /// An airline whose flights were all deleted is still present and
    /// yields an empty list, not `AirlineNotFound`.
    pub fn list_flights(&self, airline: &str) -> RegistryResult<Vec<String>> {
        let airline = self.airline(airline)?;
        Ok(airline.flights.iter().map(|f| f.flight_num.clone()).collect())
    }

    /// First flight matching `flight_num`
    pub fn get_flight(&self, airline: &str, flight_num: &str) -> RegistryResult<&Flight> {
        self.airline(airline)?
            .find(flight_num)
            .ok_or(RegistryError::FlightNotFound)
    }

    /// Append a flight, creating the airline first when it is unknown.
    ///
    /// Never fails and never checks for duplicate flight numbers.
    pub fn add_flight(&mut self, airline: &str, flight: Flight) -> &Flight {
        let idx = match self.index_of(airline) {
            Some(idx) => idx,
            None => {
                info!(airline, "creating airline");
                self.airlines.push(Airline::new(airline));
                self.airlines.len() - 1
            }
        };

        debug!(airline, flight_num = %flight.flight_num, "adding flight");
        let flights = &mut self.airlines[idx].flights;
        flights.push(flight);
        &flights[flights.len() - 1]
    }

    /// Replace the first flight matching `flight_num` in place.
    ///
    /// The replacement is stored as given, so its `flight_num` may differ
    /// from the one used for the lookup.
    pub fn update_flight(
        &mut self,
        airline: &str,
        flight_num: &str,
        new_flight: Flight,
    ) -> RegistryResult<&Flight> {
        let entry = self.airline_mut(airline)?;
        let pos = entry
            .position(flight_num)
            .ok_or(RegistryError::FlightNotFound)?;

        debug!(
            airline,
            flight_num,
            new_flight_num = %new_flight.flight_num,
            "replacing flight"
        );
        entry.flights[pos] = new_flight;
        Ok(&entry.flights[pos])
    }

    /// Remove the first flight matching `flight_num` and return it.
    ///
    /// Flights after it move down one position.
    pub fn delete_flight(&mut self, airline: &str, flight_num: &str) -> RegistryResult<Flight> {
        let entry = self.airline_mut(airline)?;
        let pos = entry
            .position(flight_num)
            .ok_or(RegistryError::FlightNotFound)?;

        debug!(airline, flight_num, "removing flight");
        Ok(entry.flights.remove(pos))
    }

    /// Number of airlines
    pub fn airline_count(&self) -> usize {
        self.airlines.len()
    }

    /// Number of flights across all airlines
    pub fn flight_count(&self) -> usize {
        self.airlines.iter().map(|a| a.flights.len()).sum()
    }

    fn index_of(&self, airline: &str) -> Option<usize> {
        self.airlines.iter().position(|a| a.name == airline)
    }

    fn airline(&self, airline: &str) -> RegistryResult<&Airline> {
        self.airlines
            .iter()
            .find(|a| a.name == airline)
            .ok_or(RegistryError::AirlineNotFound)
    }

    fn airline_mut(&mut self, airline: &str) -> RegistryResult<&mut Airline> {
        self.airlines
            .iter_mut()
            .find(|a| a.name == airline)
            .ok_or(RegistryError::AirlineNotFound)
    }
}
