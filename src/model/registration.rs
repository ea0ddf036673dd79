use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A rider registered against a route, pinned to the stop nearest to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "route")]
    pub route_id: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Name of a stop on `route_id` that was within the acceptance threshold when registering
    #[serde(rename = "currentStop")]
    pub resolved_stop: String,
    pub registered_at: DateTime<Utc>,
}

/// Registration fields that passed validation but have not been matched to a stop yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub route_id: String,
    pub coordinate: Coordinate,
}
