//! Responsible for loading the route network from a JSON file into the record store
use std::path::Path;

use anyhow::{Context, Error, bail};
use itertools::Itertools;
use tracing::info;

use crate::{
    model::{Coordinate, Route},
    store::RecordStore,
};

/// Reads and checks a routes file. See [`parse_routes`] for the rules.
#[tracing::instrument(err)]
pub async fn load_routes_file(path: &Path) -> Result<Vec<Route>, Error> {
    let routes_string = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Error reading routes file {}", path.display()))?;

    parse_routes(&routes_string)
}

/// Parses `[{"route": "T789", "stops": [{"name", "latitude", "longitude"}]}]`.
///
/// Every route needs at least one stop, ids must be unique and stop coordinates
/// must be in range.
pub fn parse_routes(routes_string: &str) -> Result<Vec<Route>, Error> {
    let routes: Vec<Route> = serde_json::from_str(routes_string).context("Error parsing routes")?;

    if let Some(duplicate) = routes.iter().map(|r| &r.id).duplicates().next() {
        bail!("Route {duplicate} is defined more than once");
    }

    for route in &routes {
        if route.stops.is_empty() {
            bail!("Route {} has no stops", route.id);
        }
        for stop in &route.stops {
            Coordinate::checked(stop.coordinate.latitude, stop.coordinate.longitude)
                .with_context(|| format!("Invalid stop {} on route {}", stop.name, route.id))?;
        }
    }

    Ok(routes)
}

/// Creates or replaces every route in the store.
pub async fn seed_routes(store: &dyn RecordStore, routes: &[Route]) -> Result<(), Error> {
    for route in routes {
        store
            .upsert_route(route)
            .await
            .with_context(|| format!("Error saving route {}", route.id))?;
        info!("saved route {} with {} stops", route.id, route.stops.len());
    }

    Ok(())
}
