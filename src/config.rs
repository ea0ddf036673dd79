use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

use crate::eta::AVERAGE_SPEED_KMH;

/// Tracks a bus and tells registered riders when it will reach their stop.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Postgres connection string. Without it everything is kept in memory.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// JSON file with the route network, loaded into the store on startup
    #[arg(long, env = "ROUTES_FILE")]
    pub routes_file: Option<PathBuf>,

    /// Origin allowed to call the API from a browser. Any origin when unset.
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    #[arg(long, env = "AVERAGE_SPEED_KMH", default_value_t = AVERAGE_SPEED_KMH, value_parser = parse_speed)]
    pub average_speed_kmh: f64,

    /// OTLP gRPC collector. Spans are only exported when this is set.
    #[arg(long, env = "OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    #[arg(long, env = "LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,
}

fn parse_speed(value: &str) -> Result<f64, String> {
    let speed: f64 = value.parse().map_err(|e| format!("{e}"))?;

    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("average speed must be a positive number of km/h, got {value}"))
    }
}
