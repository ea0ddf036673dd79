use itertools::Itertools;
use sqlx::{Error, Pool, Postgres, QueryBuilder, Transaction, query, query_as};
use tracing::{Instrument, info_span};

use crate::model::{Route, db_model::StopDb};

/// Postgres caps binds per statement, so large routes are inserted in chunks.
const STOPS_PER_INSERT: usize = 1024;

pub fn stop_rows(route: &Route) -> Vec<StopDb> {
    route
        .stops
        .iter()
        .enumerate()
        .map(|(sequence, stop)| StopDb {
            route_id: route.id.clone(),
            sequence: sequence as i32,
            name: stop.name.clone(),
            latitude: stop.coordinate.latitude,
            longitude: stop.coordinate.longitude,
        })
        .collect_vec()
}

pub async fn insert_stops(stops: &[StopDb], tx: &mut Transaction<'_, Postgres>) -> Result<(), Error> {
    for chunk in stops.chunks(STOPS_PER_INSERT) {
        let mut query_builder = QueryBuilder::new(
            "INSERT INTO stops (
                route_id,
                sequence,
                name,
                latitude,
                longitude
            )",
        );

        query_builder.push_values(chunk, |mut b, stop| {
            b.push_bind(&stop.route_id)
                .push_bind(stop.sequence)
                .push_bind(&stop.name)
                .push_bind(stop.latitude)
                .push_bind(stop.longitude);
        });

        query_builder
            .build()
            .execute(&mut **tx)
            .instrument(info_span!("Inserting stops"))
            .await?;
    }

    Ok(())
}

pub async fn delete_route_stops(route_id: &str, tx: &mut Transaction<'_, Postgres>) -> Result<u64, Error> {
    let res = query("DELETE FROM stops WHERE route_id = $1")
        .bind(route_id)
        .execute(&mut **tx)
        .await?;

    Ok(res.rows_affected())
}

#[tracing::instrument(err, skip(pool))]
pub async fn get_route_stops(route_id: &str, pool: &Pool<Postgres>) -> Result<Vec<StopDb>, Error> {
    query_as(
        "SELECT route_id, sequence, name, latitude, longitude
        FROM stops WHERE route_id = $1 ORDER BY sequence",
    )
    .bind(route_id)
    .fetch_all(pool)
    .await
}
