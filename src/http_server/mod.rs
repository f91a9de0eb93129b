//! # HTTP Server Module
//!
//! Axum server exposing the airline registry.
//!
//! # Endpoints
//!
//! - `/` - Airline names
//! - `/{airline}` - Flight numbers, add flight
//! - `/{airline}/{flight_num}` - Get, replace, delete flight
//! - `/health` - Health check, on the admin listener only

pub mod airline_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use airline_routes::AirlineState;
pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
