//! Airline HTTP Routes
//!
//! CRUD endpoints over the airline registry:
//!
//! - `GET /` - airline names
//! - `GET /{airline}` - flight numbers of one airline
//! - `POST /{airline}` - add a flight (creates the airline if needed)
//! - `GET|PUT|DELETE /{airline}/{flight_num}` - one flight

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};

use crate::registry::{AirlineRegistry, Flight};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Registry state shared across handlers.
///
/// Each operation takes the lock once, so a single request is applied
/// as a whole; nothing spans more than one request.
#[derive(Debug, Default)]
pub struct AirlineState {
    registry: RwLock<AirlineRegistry>,
}

impl AirlineState {
    /// Create state holding the seeded registry
    pub fn new() -> Self {
        Self::with_registry(AirlineRegistry::new())
    }

    /// Create state around an existing registry
    pub fn with_registry(registry: AirlineRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Every mutation leaves the registry consistent, so a poisoned lock
    /// is still safe to read.
    pub fn read(&self) -> RwLockReadGuard<'_, AirlineRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, AirlineRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ==================
// Airline Routes
// ==================

/// Create airline routes
pub fn airline_routes(state: Arc<AirlineState>) -> Router {
    Router::new()
        .route("/", get(list_airlines_handler))
        .route(
            "/:airline",
            get(list_flights_handler).post(add_flight_handler),
        )
        .route(
            "/:airline/:flight_num",
            get(get_flight_handler)
                .put(update_flight_handler)
                .delete(delete_flight_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode a flight from the raw request body.
///
/// A missing `Content-Type` is read as JSON. Any declared type other than
/// `application/json` or `application/*+json` is rejected with a 422.
fn decode_flight(headers: &HeaderMap, body: &Bytes) -> ApiResult<Flight> {
    if let Some(value) = headers.get(header::CONTENT_TYPE) {
        let content_type = value.to_str().unwrap_or_default();
        if !is_json_content_type(content_type) {
            return Err(ApiError::not_json(content_type));
        }
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

// ==================
// Handlers
// ==================

async fn list_airlines_handler(State(state): State<Arc<AirlineState>>) -> Json<Vec<String>> {
    Json(state.read().list_airlines())
}

async fn list_flights_handler(
    State(state): State<Arc<AirlineState>>,
    Path(airline): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let flights = state.read().list_flights(&airline)?;
    Ok(Json(flights))
}

async fn get_flight_handler(
    State(state): State<Arc<AirlineState>>,
    Path((airline, flight_num)): Path<(String, String)>,
) -> ApiResult<Json<Flight>> {
    let flight = state.read().get_flight(&airline, &flight_num)?.clone();
    Ok(Json(flight))
}

async fn add_flight_handler(
    State(state): State<Arc<AirlineState>>,
    Path(airline): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Flight>)> {
    let flight = decode_flight(&headers, &body)?;
    let stored = state.write().add_flight(&airline, flight).clone();
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_flight_handler(
    State(state): State<Arc<AirlineState>>,
    Path((airline, flight_num)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Flight>> {
    let flight = decode_flight(&headers, &body)?;
    let stored = state
        .write()
        .update_flight(&airline, &flight_num, flight)?
        .clone();
    Ok(Json(stored))
}

async fn delete_flight_handler(
    State(state): State<Arc<AirlineState>>,
    Path((airline, flight_num)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.write().delete_flight(&airline, &flight_num)?;
    Ok(StatusCode::NO_CONTENT)
}
