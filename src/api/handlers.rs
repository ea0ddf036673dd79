use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use crate::{
    model::{
        UserRegistration,
        api_model::{RegistrationInput, VehiclePositionInput},
    },
    services::TrackerService,
    utils::{format_km, format_minutes},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserRegistration,
    pub closest_stop: String,
    pub distance_km: f64,
    /// e.g. "0.50 km"
    pub distance_to_stop: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusLocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EtaResponse {
    pub eta_minutes: f64,
    pub distance_km: f64,
    /// e.g. "30.00 minutes"
    pub eta: String,
    /// e.g. "11.25 km"
    pub distance: String,
}

pub async fn health() -> &'static str {
    "Server is running!"
}

#[tracing::instrument(skip_all)]
pub async fn register_bus_user(
    State(service): State<TrackerService>,
    body: Result<Json<RegistrationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(input) = body?;
    let outcome = service.register_user(input).await?;

    info!(
        route = %outcome.user.route_id,
        stop = %outcome.resolved_stop,
        "registered rider"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".to_owned(),
            distance_to_stop: format_km(outcome.distance_km),
            closest_stop: outcome.resolved_stop,
            distance_km: outcome.distance_km,
            user: outcome.user,
        }),
    ))
}

#[tracing::instrument(skip_all)]
pub async fn register_bus_location(
    State(service): State<TrackerService>,
    body: Result<Json<VehiclePositionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(input) = body?;
    let sample = service.record_vehicle_position(input).await?;

    info!(
        latitude = sample.coordinate.latitude,
        longitude = sample.coordinate.longitude,
        "bus location saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Bus location saved successfully.".to_owned(),
        }),
    ))
}

#[tracing::instrument(skip_all)]
pub async fn latest_bus_location(
    State(service): State<TrackerService>,
) -> Result<Json<BusLocationResponse>, ApiError> {
    let sample = service.latest_vehicle_position().await?;

    Ok(Json(BusLocationResponse {
        latitude: sample.coordinate.latitude,
        longitude: sample.coordinate.longitude,
        timestamp: sample.timestamp,
    }))
}

#[tracing::instrument(skip_all)]
pub async fn latest_eta(State(service): State<TrackerService>) -> Result<Json<EtaResponse>, ApiError> {
    let eta = service.compute_latest_eta().await?;

    Ok(Json(EtaResponse {
        eta_minutes: eta.eta_minutes,
        distance_km: eta.distance_km,
        eta: format_minutes(eta.eta_minutes),
        distance: format_km(eta.distance_km),
    }))
}

pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Route not found".to_owned(),
        }),
    )
}
