//! HTTP surface of the tracker. Paths match the ones the web client and the bus firmware already use.

pub mod error;
pub mod handlers;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::services::TrackerService;
use handlers::{
    health, latest_bus_location, latest_eta, not_found, register_bus_location, register_bus_user,
};

/// Builds the router. Without `cors_origin` any origin may call the API.
pub fn create_router(service: TrackerService, cors_origin: Option<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    let cors = match cors_origin {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    };

    Router::new()
        .route("/", get(health))
        .route("/api/register-bus-user", post(register_bus_user))
        .route("/register-bus-location", post(register_bus_location))
        .route("/buslocations/latest", get(latest_bus_location))
        .route("/calculate-eta/latest", get(latest_eta))
        .fallback(not_found)
        .layer(cors)
        .with_state(service)
}
