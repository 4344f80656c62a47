//! Request-path knobs fixed once at startup.

use std::sync::OnceLock;

use crate::config::ServerConfig;

#[derive(Clone, Copy, Debug)]
struct RequestSettings {
    slow_request_threshold_ms: u64,
    continue_parent_traces: bool,
}

const DEFAULTS: RequestSettings = RequestSettings {
    slow_request_threshold_ms: 1_000,
    continue_parent_traces: false,
};

static SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

pub(super) fn install(config: &ServerConfig) {
    let _first = SETTINGS.set(RequestSettings {
        slow_request_threshold_ms: config.logging.slow_request_threshold_ms,
        continue_parent_traces: config.tracing.continues_parent_traces(),
    });
}

fn current() -> RequestSettings {
    SETTINGS.get().copied().unwrap_or(DEFAULTS)
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    current().slow_request_threshold_ms
}

pub(super) fn continue_parent_traces() -> bool {
    current().continue_parent_traces
}
