pub mod registrations;
pub mod routes;
pub mod stops;
pub mod vehicle_positions;

pub use registrations::*;
pub use routes::*;
pub use vehicle_positions::*;

use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres};
use tracing::info;

use crate::{
    error::StoreError,
    model::{Route, UserRegistration, VehiclePositionSample},
    store::RecordStore,
};

/// [`RecordStore`] backed by Postgres.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    /// Connects and brings the schema up to date.
    pub async fn connect(db_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(db_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrated");

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn find_route_by_id(&self, id: &str) -> Result<Option<Route>, StoreError> {
        Ok(get_route(id, &self.pool).await?)
    }

    async fn upsert_route(&self, route: &Route) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        routes::upsert_route(route, &mut tx).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn save_user_registration(&self, registration: &UserRegistration) -> Result<(), StoreError> {
        Ok(insert_registration(registration, &self.pool).await?)
    }

    async fn find_latest_user_registration(&self) -> Result<Option<UserRegistration>, StoreError> {
        Ok(get_latest_registration(&self.pool)
            .await?
            .map(UserRegistration::from))
    }

    async fn append_vehicle_position(&self, sample: &VehiclePositionSample) -> Result<(), StoreError> {
        Ok(insert_vehicle_position(sample, &self.pool).await?)
    }

    async fn find_latest_vehicle_position(&self) -> Result<Option<VehiclePositionSample>, StoreError> {
        Ok(get_latest_vehicle_position(&self.pool)
            .await?
            .map(VehiclePositionSample::from))
    }
}
