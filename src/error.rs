//! Errors surfaced by the tracking core. Nothing here is logged or swallowed, the caller decides.

use crate::matcher::NoNearbyStop;

/// A required field was missing or malformed. Retrying the same input never helps.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("email {0:?} is malformed")]
    MalformedEmail(String),
}

/// Failure of the external record store. May be retried by the caller.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("error applying migrations")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("route {0:?} not found in the system")]
    RouteNotFound(String),

    #[error("no buses available nearby")]
    NoBusesNearby(#[from] NoNearbyStop),

    #[error("no registered user found")]
    NoUserFound,

    #[error("no bus location found")]
    NoVehiclePositionFound,

    #[error("record store failure")]
    Persistence(#[from] StoreError),
}
