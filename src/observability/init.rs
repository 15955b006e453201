//! Tracing initialization and subscriber setup.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "zcatalog-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Traces go to `~/.local/share/zellij/zcatalog/zcatalog-otlp.json`.
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber. Only the first call installs one.
///
/// # Example
///
/// ```rust
/// use zcatalog::observability::init_tracing;
/// use zcatalog::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "zcatalog"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = export::tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer("zcatalog");

    let _ = tracing_subscriber::registry()
        .with(level_filter(config))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}

/// Filter from the configured `trace_level`, falling back to `info` when the
/// directive is missing or malformed.
pub fn level_filter(config: &Config) -> EnvFilter {
    config
        .trace_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}
