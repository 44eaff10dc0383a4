//! Counter helpers

use super::labels;

/// A session finished its handshake and attach/create
pub fn session_opened(mode: &'static str) {
    metrics::counter!(labels::SESSIONS_OPENED, "mode" => mode).increment(1);
}

/// Session establishment failed at `stage`
pub fn session_failed(mode: &'static str, stage: &'static str) {
    metrics::counter!(labels::SESSIONS_FAILED, "mode" => mode, "stage" => stage).increment(1);
}

/// A session was closed
pub fn session_closed(clean: bool) {
    let status = if clean {
        labels::STATUS_OK
    } else {
        labels::STATUS_ERROR
    };
    metrics::counter!(labels::SESSIONS_CLOSED, "status" => status).increment(1);
}

/// A transaction was begun
pub fn transaction_begun(isolation: &'static str) {
    metrics::counter!(labels::TRANSACTIONS_BEGUN, "isolation" => isolation).increment(1);
}

/// A transaction was acknowledged as committed or rolled back
pub fn transaction_resolved(outcome: &'static str) {
    metrics::counter!(labels::TRANSACTIONS_RESOLVED, "outcome" => outcome).increment(1);
}

/// A statement was dispatched
pub fn statement(kind: &'static str, status: &'static str) {
    metrics::counter!(labels::STATEMENTS, "kind" => kind, "status" => status).increment(1);
}

/// A teardown step failed
pub fn teardown_error(step: &'static str) {
    metrics::counter!(labels::TEARDOWN_ERRORS, "step" => step).increment(1);
}
