//! Fixtures and store doubles shared by unit tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    error::StoreError,
    eta::AVERAGE_SPEED_KMH,
    model::{Coordinate, Route, Stop, UserRegistration, VehiclePositionSample, api_model::RegistrationInput},
    services::TrackerService,
    store::{MemoryStore, RecordStore},
};

pub fn service_with(store: Arc<dyn RecordStore>) -> TrackerService {
    TrackerService::new(store, AVERAGE_SPEED_KMH)
}

/// Rapid KL T789 around Kelana Jaya.
pub fn t789() -> Route {
    Route {
        id: "T789".to_owned(),
        stops: vec![
            Stop::new("LRT Kelana Jaya", Coordinate::new(3.1124, 101.6044)),
            Stop::new("SS7 Kelana Jaya", Coordinate::new(3.1050, 101.5967)),
            Stop::new("Paradigm Mall", Coordinate::new(3.1046, 101.5955)),
            Stop::new("SS2 Petaling Jaya", Coordinate::new(3.1183, 101.6208)),
        ],
    }
}

pub fn rider_at(route: &str, coordinate: Coordinate) -> RegistrationInput {
    RegistrationInput {
        name: Some("Ana".to_owned()),
        email: Some("ana@example.com".to_owned()),
        phone: Some("0123456789".to_owned()),
        route: Some(route.to_owned()),
        latitude: Some(coordinate.latitude),
        longitude: Some(coordinate.longitude),
    }
}

/// Counts every call and can be told to fail like an unreachable database.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    pub calls: AtomicUsize,
    pub failing: bool,
}

impl CountingStore {
    pub fn with_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            inner: MemoryStore::with_routes(routes),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn find_route_by_id(&self, id: &str) -> Result<Option<Route>, StoreError> {
        self.touch()?;
        self.inner.find_route_by_id(id).await
    }

    async fn upsert_route(&self, route: &Route) -> Result<(), StoreError> {
        self.touch()?;
        self.inner.upsert_route(route).await
    }

    async fn save_user_registration(&self, registration: &UserRegistration) -> Result<(), StoreError> {
        self.touch()?;
        self.inner.save_user_registration(registration).await
    }

    async fn find_latest_user_registration(&self) -> Result<Option<UserRegistration>, StoreError> {
        self.touch()?;
        self.inner.find_latest_user_registration().await
    }

    async fn append_vehicle_position(&self, sample: &VehiclePositionSample) -> Result<(), StoreError> {
        self.touch()?;
        self.inner.append_vehicle_position(sample).await
    }

    async fn find_latest_vehicle_position(&self) -> Result<Option<VehiclePositionSample>, StoreError> {
        self.touch()?;
        self.inner.find_latest_vehicle_position().await
    }
}
