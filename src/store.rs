//! The record store the tracking core reads from and writes to.

pub mod memory;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    model::{Route, UserRegistration, VehiclePositionSample},
};

pub use memory::MemoryStore;

/// Persistence operations needed by the registration and tracking workflows.
///
/// Implementations are handed to [`crate::services::TrackerService`] explicitly so
/// tests can swap in doubles.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads a route and its stops in travel order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend fails. A missing route is `Ok(None)`.
    async fn find_route_by_id(&self, id: &str) -> Result<Option<Route>, StoreError>;

    /// Creates the route or replaces all of its stops.
    async fn upsert_route(&self, route: &Route) -> Result<(), StoreError>;

    async fn save_user_registration(&self, registration: &UserRegistration) -> Result<(), StoreError>;

    /// The registration that was saved last.
    async fn find_latest_user_registration(&self) -> Result<Option<UserRegistration>, StoreError>;

    async fn append_vehicle_position(&self, sample: &VehiclePositionSample) -> Result<(), StoreError>;

    /// The sample with the most recent timestamp.
    async fn find_latest_vehicle_position(&self) -> Result<Option<VehiclePositionSample>, StoreError>;
}
