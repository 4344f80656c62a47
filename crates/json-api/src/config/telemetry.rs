//! Logging and trace export settings

use clap::{Args, ValueEnum};

/// How log lines are rendered on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    #[default]
    Compact,

    /// One JSON object per event, with span context.
    Json,
}

/// Log output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log directive used when `RUST_LOG` is unset
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

/// OpenTelemetry trace export settings.
#[derive(Debug, Args)]
pub struct TracingConfig {
    /// Export spans over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED")]
    pub enabled: bool,

    /// Continue traces from an incoming `traceparent` header
    #[arg(long = "otel-propagate-parent", env = "OTEL_PROPAGATE_PARENT")]
    pub propagate_parent: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// Export timeout, in seconds
    #[arg(long = "otel-timeout-secs", env = "OTEL_EXPORTER_OTLP_TIMEOUT", default_value_t = 3)]
    pub timeout_secs: u64,

    /// `service.name` resource attribute
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "cart-json")]
    pub service_name: String,

    /// `deployment.environment.name` resource attribute
    #[arg(long = "otel-environment", env = "OTEL_ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Fraction of root traces sampled, clamped to `0.0..=1.0`
    #[arg(long = "otel-sample-ratio", env = "OTEL_SAMPLE_RATIO", default_value_t = 1.0)]
    pub sample_ratio: f64,
}

impl TracingConfig {
    /// Parent propagation only applies while export is on.
    #[must_use]
    pub fn continues_parent_traces(&self) -> bool {
        self.enabled && self.propagate_parent
    }
}
