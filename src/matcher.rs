//! Picks the stop a rider should wait at.

use crate::{geo::distance_km, model::Coordinate, model::Stop};

/// Riders farther than this from every stop of their route are not served.
pub const ACCEPTANCE_THRESHOLD_KM: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NearestStop<'a> {
    pub stop: &'a Stop,
    pub distance_km: f64,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("no stop within {threshold_km} km")]
pub struct NoNearbyStop {
    pub threshold_km: f64,
}

/// Scans all `stops` for the one closest to `point`.
///
/// On exact ties the stop that comes first wins. A stop exactly `threshold_km` away
/// is accepted.
pub fn find_nearest_stop(
    stops: &[Stop],
    point: Coordinate,
    threshold_km: f64,
) -> Result<NearestStop<'_>, NoNearbyStop> {
    stops
        .iter()
        .map(|stop| NearestStop {
            stop,
            distance_km: distance_km(point, stop.coordinate),
        })
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
        .filter(|nearest| nearest.distance_km <= threshold_km)
        .ok_or(NoNearbyStop { threshold_km })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geo::EARTH_RADIUS_KM;

    /// Degrees of latitude that span `km` along a meridian.
    fn lat_offset(km: f64) -> f64 {
        (km / EARTH_RADIUS_KM).to_degrees()
    }

    fn stop_north_of_origin(name: &str, km: f64) -> Stop {
        Stop::new(name, Coordinate::new(lat_offset(km), 0.0))
    }

    const ORIGIN: Coordinate = Coordinate::new(0.0, 0.0);

    #[test]
    fn picks_the_closest_stop() {
        let stops = vec![stop_north_of_origin("A", 0.5), stop_north_of_origin("B", 2.0)];

        let nearest = find_nearest_stop(&stops, ORIGIN, ACCEPTANCE_THRESHOLD_KM).unwrap();

        assert_eq!(nearest.stop.name, "A");
        assert_abs_diff_eq!(nearest.distance_km, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn order_does_not_matter() {
        let stops = vec![
            stop_north_of_origin("far", 0.9),
            stop_north_of_origin("near", 0.2),
            stop_north_of_origin("middle", 0.6),
        ];

        let nearest = find_nearest_stop(&stops, ORIGIN, ACCEPTANCE_THRESHOLD_KM).unwrap();
        assert_eq!(nearest.stop.name, "near");
    }

    #[test]
    fn rejects_when_every_stop_is_too_far() {
        let stops = vec![stop_north_of_origin("A", 1.5), stop_north_of_origin("B", 2.0)];

        assert_eq!(
            find_nearest_stop(&stops, ORIGIN, ACCEPTANCE_THRESHOLD_KM),
            Err(NoNearbyStop { threshold_km: 1.0 })
        );
    }

    #[test]
    fn rejects_empty_route() {
        assert!(find_nearest_stop(&[], ORIGIN, ACCEPTANCE_THRESHOLD_KM).is_err());
    }

    #[test]
    fn first_stop_wins_a_tie() {
        let stops = vec![
            Stop::new("first", Coordinate::new(0.0, 0.001)),
            Stop::new("second", Coordinate::new(0.0, -0.001)),
        ];

        let nearest = find_nearest_stop(&stops, ORIGIN, ACCEPTANCE_THRESHOLD_KM).unwrap();
        assert_eq!(nearest.stop.name, "first");
    }

    #[test]
    fn threshold_is_inclusive() {
        let stops = vec![Stop::new("edge", Coordinate::new(0.0, 0.5))];
        let exact = distance_km(ORIGIN, stops[0].coordinate);

        let nearest = find_nearest_stop(&stops, ORIGIN, exact).unwrap();
        assert_eq!(nearest.distance_km, exact);

        assert!(find_nearest_stop(&stops, ORIGIN, exact - 1e-9).is_err());
    }
}
