//! Prometheus request metrics and the `/metrics` scrape endpoint.

use std::sync::LazyLock;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    register_histogram_vec_with_registry, register_int_counter_vec_with_registry,
    register_int_gauge_with_registry,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

/// Seconds; fine-grained below 100ms where most requests land.
const LATENCY_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
}

impl HttpMetrics {
    fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("cart_json".to_string()), None)?;

        let requests = register_int_counter_vec_with_registry!(
            Opts::new("http_requests_total", "Completed HTTP requests."),
            &["method", "route", "status_class", "status_code"],
            registry
        )?;

        let latency = register_histogram_vec_with_registry!(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency.")
                .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "route"],
            registry
        )?;

        let in_flight = register_int_gauge_with_registry!(
            Opts::new("http_requests_in_flight", "HTTP requests being served."),
            registry
        )?;

        Ok(Self {
            registry,
            requests,
            latency,
            in_flight,
        })
    }
}

static METRICS: LazyLock<Option<HttpMetrics>> = LazyLock::new(|| {
    HttpMetrics::new()
        .inspect_err(|source| error!(%source, "HTTP metrics disabled"))
        .ok()
});

/// Holds the in-flight gauge up until dropped.
#[derive(Debug)]
pub(super) struct InFlight(());

impl InFlight {
    pub(super) fn enter() -> Self {
        if let Some(metrics) = METRICS.as_ref() {
            metrics.in_flight.inc();
        }

        Self(())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(metrics) = METRICS.as_ref() {
            metrics.in_flight.dec();
        }
    }
}

pub(super) fn record(method: &str, route: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .requests
        .with_label_values(&[method, route, status_class(status), status.as_str()])
        .inc();

    metrics
        .latency
        .with_label_values(&[method, route])
        .observe(seconds);
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}

/// Text exposition format for Prometheus scrapes.
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let rendered = METRICS.as_ref().map(|metrics| {
        TextEncoder::new().encode_to_string(&metrics.registry.gather())
    });

    match rendered {
        Some(Ok(body)) => {
            let _previous = res
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(prometheus::TEXT_FORMAT));
            res.render(body);
        }
        Some(Err(source)) => {
            error!(%source, "metrics could not be encoded");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
        None => {
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        }
    }
}
