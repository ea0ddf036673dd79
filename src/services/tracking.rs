use chrono::Utc;

use super::TrackerService;
use crate::{
    error::TrackerError,
    eta::{Eta, estimate_eta},
    model::{VehiclePositionSample, api_model::VehiclePositionInput},
};

impl TrackerService {
    /// Appends a GPS fix from the bus, stamped with the time it was received.
    pub async fn record_vehicle_position(
        &self,
        input: VehiclePositionInput,
    ) -> Result<VehiclePositionSample, TrackerError> {
        let sample = VehiclePositionSample {
            coordinate: input.validate()?,
            timestamp: Utc::now(),
        };

        self.store.append_vehicle_position(&sample).await?;

        Ok(sample)
    }

    pub async fn latest_vehicle_position(&self) -> Result<VehiclePositionSample, TrackerError> {
        self.store
            .find_latest_vehicle_position()
            .await?
            .ok_or(TrackerError::NoVehiclePositionFound)
    }

    /// ETA of the bus at the most recently registered rider.
    pub async fn compute_latest_eta(&self) -> Result<Eta, TrackerError> {
        let user = self
            .store
            .find_latest_user_registration()
            .await?
            .ok_or(TrackerError::NoUserFound)?;
        let bus = self.latest_vehicle_position().await?;

        Ok(estimate_eta(user.coordinate, bus.coordinate, self.average_speed_kmh))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        error::ValidationError,
        geo::distance_km,
        model::Coordinate,
        test_support::{CountingStore, rider_at, service_with, t789},
    };

    fn position(latitude: f64, longitude: f64) -> VehiclePositionInput {
        VehiclePositionInput {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    #[tokio::test]
    async fn eta_needs_a_rider() {
        let service = service_with(Arc::new(CountingStore::with_routes([t789()])));
        service.record_vehicle_position(position(3.1, 101.6)).await.unwrap();

        assert!(matches!(
            service.compute_latest_eta().await,
            Err(TrackerError::NoUserFound)
        ));
    }

    #[tokio::test]
    async fn eta_needs_a_bus_position() {
        let service = service_with(Arc::new(CountingStore::with_routes([t789()])));
        service
            .register_user(rider_at("T789", Coordinate::new(3.1120, 101.6040)))
            .await
            .unwrap();

        assert!(matches!(
            service.compute_latest_eta().await,
            Err(TrackerError::NoVehiclePositionFound)
        ));
        assert!(matches!(
            service.latest_vehicle_position().await,
            Err(TrackerError::NoVehiclePositionFound)
        ));
    }

    #[tokio::test]
    async fn eta_uses_latest_rider_and_bus() {
        let service = service_with(Arc::new(CountingStore::with_routes([t789()])));
        let rider = Coordinate::new(3.1120, 101.6040);

        service
            .register_user(rider_at("T789", Coordinate::new(3.1050, 101.5967)))
            .await
            .unwrap();
        service.register_user(rider_at("T789", rider)).await.unwrap();

        service.record_vehicle_position(position(3.0, 101.0)).await.unwrap();
        let bus = service
            .record_vehicle_position(position(3.1183, 101.6208))
            .await
            .unwrap();

        let eta = service.compute_latest_eta().await.unwrap();

        let expected_km = distance_km(rider, bus.coordinate);
        assert_abs_diff_eq!(eta.distance_km, expected_km, epsilon = 1e-9);
        assert_abs_diff_eq!(eta.eta_minutes, expected_km / 22.5 * 60.0, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn configured_speed_is_used() {
        let service = TrackerService::new(Arc::new(CountingStore::with_routes([t789()])), 45.0);
        let rider = Coordinate::new(3.1120, 101.6040);

        service.register_user(rider_at("T789", rider)).await.unwrap();
        service.record_vehicle_position(position(3.1183, 101.6208)).await.unwrap();

        let eta = service.compute_latest_eta().await.unwrap();
        assert_abs_diff_eq!(eta.eta_minutes, eta.distance_km / 45.0 * 60.0, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn invalid_position_is_not_stored() {
        let store = Arc::new(CountingStore::default());
        let service = service_with(store.clone());

        let err = service
            .record_vehicle_position(VehiclePositionInput {
                latitude: Some(3.1),
                longitude: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TrackerError::Validation(ValidationError::Missing("longitude"))
        ));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn store_failure_is_surfaced() {
        let service = service_with(Arc::new(CountingStore::failing()));

        assert!(matches!(
            service.record_vehicle_position(position(3.1, 101.6)).await,
            Err(TrackerError::Persistence(_))
        ));
        assert!(matches!(
            service.compute_latest_eta().await,
            Err(TrackerError::Persistence(_))
        ));
    }
}
