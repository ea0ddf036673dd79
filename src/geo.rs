//! Great-circle math shared by stop matching and arrival estimates.

use crate::model::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// Inputs are not range checked, out-of-range values are computed like any other.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
