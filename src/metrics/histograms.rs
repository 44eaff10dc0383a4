//! Histogram helpers

use super::labels;

/// Time from transport open to attach response, in milliseconds
pub fn handshake_duration(mode: &'static str, duration_ms: u64) {
    metrics::histogram!(labels::HANDSHAKE_DURATION, "mode" => mode).record(duration_ms as f64);
}

/// Time spent in close, in milliseconds
pub fn teardown_duration(duration_ms: u64) {
    metrics::histogram!(labels::TEARDOWN_DURATION).record(duration_ms as f64);
}
