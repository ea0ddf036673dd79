use sqlx::{Error, Pool, Postgres, query, query_as};

use crate::model::{VehiclePositionSample, db_model::VehiclePositionDb};

#[tracing::instrument(err, skip(pool))]
pub async fn insert_vehicle_position(sample: &VehiclePositionSample, pool: &Pool<Postgres>) -> Result<(), Error> {
    query("INSERT INTO vehicle_positions (latitude, longitude, recorded_at) VALUES ($1, $2, $3)")
        .bind(sample.coordinate.latitude)
        .bind(sample.coordinate.longitude)
        .bind(sample.timestamp)
        .execute(pool)
        .await?;

    Ok(())
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_latest_vehicle_position(pool: &Pool<Postgres>) -> Result<Option<VehiclePositionDb>, Error> {
    query_as(
        "SELECT latitude, longitude, recorded_at
        FROM vehicle_positions ORDER BY recorded_at DESC, id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}
