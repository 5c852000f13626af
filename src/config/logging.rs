//! Dual-sink `tracing` setup: an stdout layer and an optional file layer,
//! each independently leveled and formatted (human or JSON).

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::settings::LogSettings;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub fn init(settings: &LogSettings, log_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if settings.stdout.enabled {
        let filter = EnvFilter::try_new(&settings.stdout.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let layer = if settings.stdout.format == "json" {
            tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(filter)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_ansi(settings.stdout.enable_ansi)
                .with_filter(filter)
                .boxed()
        };
        layers.push(layer);
    }

    if settings.file.enabled {
        let file = OpenOptions::new().create(true).append(true).open(log_path)?;
        let filter = EnvFilter::try_new(&settings.file.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let layer = if settings.file.format == "json" {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(file)
                .with_ansi(false)
                .with_filter(filter)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_filter(filter)
                .boxed()
        };
        layers.push(layer);
    }

    let subscriber = tracing_subscriber::registry().with(layers);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
