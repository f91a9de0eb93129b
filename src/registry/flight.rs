//! # Flight Record

use serde::{Deserialize, Serialize};

/// A single flight owned by an airline.
///
/// Only the type shape is checked on input: no range checks on the
/// integers and no uniqueness check on `flight_num`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_num: String,
    /// Seats
    pub capacity: i64,
    /// Minutes
    pub estimated_flight_duration: i64,
}

impl Flight {
    pub fn new(flight_num: impl Into<String>, capacity: i64, estimated_flight_duration: i64) -> Self {
        Self {
            flight_num: flight_num.into(),
            capacity,
            estimated_flight_duration,
        }
    }
}
