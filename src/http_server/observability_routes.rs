//! Observability HTTP Routes
//!
//! Health check reporting the crate version and registry size. Served on
//! the admin listener only; the main listener gives every path to airlines.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::airline_routes::AirlineState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub airlines: usize,
    pub flights: usize,
}

/// Admin routes: `/health`
pub fn health_routes(state: Arc<AirlineState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<AirlineState>>) -> impl IntoResponse {
    let registry = state.read();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        airlines: registry.airline_count(),
        flights: registry.flight_count(),
    };

    (StatusCode::OK, Json(response))
}
