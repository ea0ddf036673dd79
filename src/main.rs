use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use config::Args;
use dal::PgStore;
use dotenvy::dotenv;
use services::{TrackerService, route_seeder};
use store::{MemoryStore, RecordStore};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod config;
mod dal;
mod error;
mod eta;
mod geo;
mod matcher;
mod model;
mod services;
mod store;
#[cfg(test)]
mod test_support;
mod telemetry;
mod utils;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    _ = dotenv();
    let args = Args::parse();

    let _telemetry = telemetry::init(&args.log_dir, args.otlp_endpoint.as_deref())?;
    info!("OTLP_ENDPOINT: {:?}", args.otlp_endpoint);

    let store: Arc<dyn RecordStore> = match &args.database_url {
        Some(db_url) => Arc::new(
            PgStore::connect(db_url)
                .await
                .context("Error connecting to the database")?,
        ),
        None => {
            warn!("DATABASE_URL not set, keeping routes, riders and bus locations in memory");
            Arc::new(MemoryStore::new())
        }
    };

    if let Some(routes_file) = &args.routes_file {
        let routes = route_seeder::load_routes_file(routes_file).await?;
        route_seeder::seed_routes(store.as_ref(), &routes).await?;
    }

    let cors_origin = args
        .cors_origin
        .as_deref()
        .map(HeaderValue::from_str)
        .transpose()
        .context("Invalid CORS_ORIGIN")?;

    let service = TrackerService::new(store, args.average_speed_kmh);
    let app = api::create_router(service, cors_origin);

    let address = SocketAddr::new(args.host, args.port);
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Error binding {address}"))?;
    info!("Server is running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("error listening for shutdown signal: {e}");
    }
}
