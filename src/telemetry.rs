use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const SERVICE_NAME: &str = "bus_tracker";

/// Keeps the log writer and span exporter alive. Flushes both on drop.
pub struct TelemetryGuard {
    _file_guard: WorkerGuard,
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(e) = provider.shutdown()
        {
            error!("error shutting down tracer provider: {e}");
        }
    }
}

/// Installs the global subscriber: stdout, a daily rolling file in `log_dir` and,
/// when `otlp_endpoint` is set, span export over OTLP gRPC.
pub fn init(log_dir: &Path, otlp_endpoint: Option<&str>) -> Result<TelemetryGuard> {
    let provider = otlp_endpoint
        .map(|endpoint| {
            let exporter = SpanExporter::builder()
                .with_tonic()
                .with_timeout(Duration::from_millis(1000))
                .with_endpoint(endpoint)
                .build()
                .context("Error building OTLP span exporter")?;

            Ok::<_, anyhow::Error>(
                SdkTracerProvider::builder()
                    .with_batch_exporter(exporter)
                    .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
                    .build(),
            )
        })
        .transpose()?;

    let telemetry_layer = provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME)));

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let appender = tracing_appender::rolling::daily(log_dir, "bus_tracker.log");
    let (non_blocking_appender, file_guard) = tracing_appender::non_blocking(appender);

    // A layer that logs events to rolling files.
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .pretty();

    Registry::default()
        .with(telemetry_layer)
        .with(tracing_subscriber::fmt::layer())
        .with(file_log)
        .with(env_filter)
        .try_init()
        .context("Error installing tracing subscriber")?;

    Ok(TelemetryGuard {
        _file_guard: file_guard,
        provider,
    })
}
