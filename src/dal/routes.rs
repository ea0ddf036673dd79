use itertools::Itertools;
use sqlx::{Error, Pool, Postgres, Transaction, query, query_scalar};
use tracing::{Instrument, info_span};

use super::stops::{delete_route_stops, get_route_stops, insert_stops, stop_rows};
use crate::model::{Route, Stop};

/// Returns the route with its stops in travel order, or `None` if the id is unknown.
#[tracing::instrument(err, skip(pool))]
pub async fn get_route(id: &str, pool: &Pool<Postgres>) -> Result<Option<Route>, Error> {
    let id: Option<String> = query_scalar("SELECT id FROM routes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(id) = id else {
        return Ok(None);
    };

    let stops = get_route_stops(&id, pool)
        .await?
        .into_iter()
        .map(Stop::from)
        .collect_vec();

    Ok(Some(Route { id, stops }))
}

/// Inserts the route if it is new and replaces its stops.
pub async fn upsert_route(route: &Route, tx: &mut Transaction<'_, Postgres>) -> Result<(), Error> {
    query("INSERT INTO routes (id) VALUES ($1) ON CONFLICT ( id ) DO NOTHING")
        .bind(&route.id)
        .execute(&mut **tx)
        .instrument(info_span!("Inserting route"))
        .await?;

    delete_route_stops(&route.id, tx).await?;
    insert_stops(&stop_rows(route), tx).await?;

    Ok(())
}
