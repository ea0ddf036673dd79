use serde::Serialize;

use crate::{geo::distance_km, model::Coordinate};

/// Average bus speed in km/h including stops and traffic.
pub const AVERAGE_SPEED_KMH: f64 = 22.5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Eta {
    pub eta_minutes: f64,
    pub distance_km: f64,
}

/// Straight line estimate of how long the bus needs to reach the rider.
///
/// This is a known approximation: route shape, traffic and heading are ignored, so
/// the real arrival is usually later.
///
/// `average_speed_kmh` must be finite and greater than zero. It is not checked here,
/// callers validate it when reading configuration.
pub fn estimate_eta(user_point: Coordinate, vehicle_point: Coordinate, average_speed_kmh: f64) -> Eta {
    let distance_km = distance_km(user_point, vehicle_point);

    Eta {
        eta_minutes: distance_km / average_speed_kmh * 60.0,
        distance_km,
    }
}
