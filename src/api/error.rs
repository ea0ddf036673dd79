use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use super::handlers::MessageResponse;
use crate::error::TrackerError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("invalid request body")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Tracker(err) => match err {
                TrackerError::Validation(_) | TrackerError::NoBusesNearby(_) => StatusCode::BAD_REQUEST,
                TrackerError::RouteNotFound(_)
                | TrackerError::NoUserFound
                | TrackerError::NoVehiclePositionFound => StatusCode::NOT_FOUND,
                TrackerError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            // Store failures stay in the logs, clients only learn that they may retry
            ApiError::Tracker(TrackerError::Persistence(err)) => {
                error!(error = ?err, "record store failure");
                "Failed to process the request. Please try again later.".to_owned()
            }
            ApiError::InvalidBody(rejection) => {
                info!("rejected body: {rejection}");
                format!("Invalid request body: {}", rejection.body_text())
            }
            ApiError::Tracker(err) => {
                info!("request failed: {err}");
                upper_first(&err.to_string())
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
