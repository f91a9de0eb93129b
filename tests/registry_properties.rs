//! Registry Property Tests
//!
//! Lookup, round-trip and first-match behaviour of the airline registry:
//! - Unknown airlines fail every read with AirlineNotFound
//! - add then get returns the stored flight
//! - update and delete act on the first matching flight only

use airline_flights::registry::{AirlineRegistry, Flight, RegistryError};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_flights() -> Vec<Flight> {
    vec![
        Flight::new("DL9999", 50, 90),
        Flight::new("XX1", 0, 0),
        Flight::new("", -1, i64::MAX),
    ]
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_fresh_registry_airline_order() {
    let registry = AirlineRegistry::new();
    assert_eq!(registry.list_airlines(), vec!["Delta", "Southwest", "Alaska"]);
}

#[test]
fn test_absent_airlines_are_not_found() {
    let registry = AirlineRegistry::new();

    for name in ["Unknown", "", "delta", "Delta ", "Alaska/AS900"] {
        assert_eq!(
            registry.list_flights(name),
            Err(RegistryError::AirlineNotFound),
            "list_flights({name:?})"
        );
        assert_eq!(
            registry.get_flight(name, "DL1234"),
            Err(RegistryError::AirlineNotFound),
            "get_flight({name:?})"
        );
    }
}

// =============================================================================
// Mutation Tests
// =============================================================================

#[test]
fn test_add_then_get_round_trip() {
    for airline in ["Delta", "Brand New"] {
        let mut registry = AirlineRegistry::new();
        for flight in sample_flights() {
            registry.add_flight(airline, flight.clone());
            assert_eq!(registry.get_flight(airline, &flight.flight_num), Ok(&flight));
        }
    }
}

#[test]
fn test_update_then_get_new_number() {
    let mut registry = AirlineRegistry::new();
    let replacement = Flight::new("DL4321", 80, 95);

    registry
        .update_flight("Delta", "DL1234", replacement.clone())
        .unwrap();

    assert_eq!(registry.get_flight("Delta", "DL4321"), Ok(&replacement));
    assert_eq!(
        registry.get_flight("Delta", "DL1234"),
        Err(RegistryError::FlightNotFound)
    );
}

#[test]
fn test_rename_exposes_next_duplicate() {
    let mut registry = AirlineRegistry::new();
    let later = Flight::new("DL1234", 1, 2);
    registry.add_flight("Delta", later.clone());

    registry
        .update_flight("Delta", "DL1234", Flight::new("DL0000", 3, 4))
        .unwrap();

    // The old number now resolves to the later duplicate
    assert_eq!(registry.get_flight("Delta", "DL1234"), Ok(&later));
    assert_eq!(
        registry.list_flights("Delta").unwrap(),
        vec!["DL0000", "DL5678", "DL1234"]
    );
}

#[test]
fn test_delete_then_get_is_not_found() {
    let mut registry = AirlineRegistry::new();
    registry.delete_flight("Southwest", "SWA3298").unwrap();

    assert_eq!(
        registry.get_flight("Southwest", "SWA3298"),
        Err(RegistryError::FlightNotFound)
    );
    assert_eq!(registry.list_flights("Southwest").unwrap(), vec!["SWA8002"]);
}

#[test]
fn test_delete_keeps_later_duplicate() {
    let mut registry = AirlineRegistry::new();
    let duplicate = Flight::new("AS900", 1, 1);
    registry.add_flight("Alaska", duplicate.clone());

    registry.delete_flight("Alaska", "AS900").unwrap();

    assert_eq!(registry.get_flight("Alaska", "AS900"), Ok(&duplicate));
}

#[test]
fn test_mutations_on_absent_airline() {
    let mut registry = AirlineRegistry::new();

    assert_eq!(
        registry.update_flight("Ghost", "G1", Flight::new("G1", 1, 1)),
        Err(RegistryError::AirlineNotFound)
    );
    assert_eq!(
        registry.delete_flight("Ghost", "G1"),
        Err(RegistryError::AirlineNotFound)
    );
    assert_eq!(registry.airline_count(), 3);
}

#[test]
fn test_registries_are_independent() {
    let mut first = AirlineRegistry::new();
    let second = AirlineRegistry::new();

    first.delete_flight("Delta", "DL1234").unwrap();

    assert_eq!(second.list_flights("Delta").unwrap(), vec!["DL1234", "DL5678"]);
}
