use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::{
    error::StoreError,
    model::{Route, UserRegistration, VehiclePositionSample},
};

/// Process-local store used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    routes: RwLock<HashMap<String, Route>>,
    registrations: RwLock<Vec<UserRegistration>>,
    positions: RwLock<Vec<VehiclePositionSample>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: RwLock::new(
                routes
                    .into_iter()
                    .map(|route| (route.id.clone(), route))
                    .collect(),
            ),
            ..Self::default()
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_route_by_id(&self, id: &str) -> Result<Option<Route>, StoreError> {
        Ok(self.routes.read().await.get(id).cloned())
    }

    async fn upsert_route(&self, route: &Route) -> Result<(), StoreError> {
        self.routes
            .write()
            .await
            .insert(route.id.clone(), route.clone());
        Ok(())
    }

    async fn save_user_registration(&self, registration: &UserRegistration) -> Result<(), StoreError> {
        self.registrations.write().await.push(registration.clone());
        Ok(())
    }

    async fn find_latest_user_registration(&self) -> Result<Option<UserRegistration>, StoreError> {
        Ok(self.registrations.read().await.last().cloned())
    }

    async fn append_vehicle_position(&self, sample: &VehiclePositionSample) -> Result<(), StoreError> {
        self.positions.write().await.push(*sample);
        Ok(())
    }

    async fn find_latest_vehicle_position(&self) -> Result<Option<VehiclePositionSample>, StoreError> {
        // Samples can arrive out of order, max_by_key keeps the last one on equal timestamps
        Ok(self
            .positions
            .read()
            .await
            .iter()
            .max_by_key(|sample| sample.timestamp)
            .copied())
    }
}
