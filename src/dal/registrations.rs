use sqlx::{Error, Pool, Postgres, query, query_as};

use crate::model::{UserRegistration, db_model::UserRegistrationDb};

#[tracing::instrument(err, skip(pool, registration), fields(route = %registration.route_id))]
pub async fn insert_registration(registration: &UserRegistration, pool: &Pool<Postgres>) -> Result<(), Error> {
    query(
        "INSERT INTO user_registrations (
            name,
            email,
            phone,
            route_id,
            latitude,
            longitude,
            resolved_stop,
            registered_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&registration.name)
    .bind(&registration.email)
    .bind(&registration.phone)
    .bind(&registration.route_id)
    .bind(registration.coordinate.latitude)
    .bind(registration.coordinate.longitude)
    .bind(&registration.resolved_stop)
    .bind(registration.registered_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Latest by insertion order
#[tracing::instrument(err, skip(pool))]
pub async fn get_latest_registration(pool: &Pool<Postgres>) -> Result<Option<UserRegistrationDb>, Error> {
    query_as(
        "SELECT
        name,
        email,
        phone,
        route_id,
        latitude,
        longitude,
        resolved_stop,
        registered_at
        FROM user_registrations ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}
