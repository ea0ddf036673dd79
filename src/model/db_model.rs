use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

use super::{
    coordinate::Coordinate, registration::UserRegistration, stop::Stop,
    vehicle::VehiclePositionSample,
};

#[derive(Clone, Debug, FromRow)]
pub struct StopDb {
    pub route_id: String,
    /// Position of the stop along the route, starting at 0
    pub sequence: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<StopDb> for Stop {
    fn from(value: StopDb) -> Self {
        Stop::new(value.name, Coordinate::new(value.latitude, value.longitude))
    }
}

#[derive(Clone, Debug, FromRow)]
pub struct UserRegistrationDb {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub route_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_stop: String,
    pub registered_at: DateTime<Utc>,
}

impl From<UserRegistrationDb> for UserRegistration {
    fn from(value: UserRegistrationDb) -> Self {
        UserRegistration {
            name: value.name,
            email: value.email,
            phone: value.phone,
            route_id: value.route_id,
            coordinate: Coordinate::new(value.latitude, value.longitude),
            resolved_stop: value.resolved_stop,
            registered_at: value.registered_at,
        }
    }
}

#[derive(Copy, Clone, Debug, FromRow)]
pub struct VehiclePositionDb {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

impl From<VehiclePositionDb> for VehiclePositionSample {
    fn from(value: VehiclePositionDb) -> Self {
        VehiclePositionSample {
            coordinate: Coordinate::new(value.latitude, value.longitude),
            timestamp: value.recorded_at,
        }
    }
}
