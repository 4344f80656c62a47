//! Subscriber setup and exporter lifecycle.

use std::time::Duration;

use opentelemetry::{KeyValue, global, trace::TracerProvider as _};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    trace::{Sampler, SdkTracerProvider},
};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{
    ServerConfig,
    telemetry::{LogFormat, LoggingConfig, TracingConfig},
};

use super::settings;

/// Dependencies that only speak up at `warn` unless `RUST_LOG` overrides them.
const QUIET_TARGETS: [&str; 6] = ["h2", "hyper", "opentelemetry", "reqwest", "sqlx", "tonic"];

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("could not build the OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("a global tracing subscriber is already installed: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the span exporter alive until [`Observability::shutdown`].
#[derive(Debug)]
pub(crate) struct Observability {
    provider: Option<SdkTracerProvider>,
}

impl Observability {
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::install(config);

        let provider = config
            .tracing
            .enabled
            .then(|| tracer_provider(&config.tracing))
            .transpose()?;

        if provider.is_some() {
            global::set_text_map_propagator(TraceContextPropagator::new());
        }

        let otel_layer = provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer()
                .with_tracer(provider.tracer(config.tracing.service_name.clone()))
        });

        tracing_subscriber::registry()
            .with(fmt_layer(config.logging.log_format))
            .with(env_filter(&config.logging))
            .with(otel_layer)
            .try_init()?;

        Ok(Self { provider })
    }

    /// Flushes buffered spans.
    pub(crate) fn shutdown(self) {
        let Some(provider) = self.provider else {
            return;
        };

        if let Err(source) = provider.shutdown() {
            warn!(error = %source, "span exporter did not shut down cleanly");
        }
    }
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer().with_target(true);

    match format {
        LogFormat::Compact => layer
            .compact()
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let quiet = QUIET_TARGETS.map(|target| format!("{target}=warn")).join(",");

        EnvFilter::new(format!("{},{quiet}", config.log_level))
    })
}

fn tracer_provider(config: &TracingConfig) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.endpoint.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let resource = Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("deployment.environment.name", config.environment.clone()),
        ])
        .build();

    let sampler = Sampler::TraceIdRatioBased(config.sample_ratio.clamp(0.0, 1.0));

    Ok(SdkTracerProvider::builder()
        .with_sampler(Sampler::ParentBased(Box::new(sampler)))
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

