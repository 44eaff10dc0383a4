//! Metric names and label values

/// Sessions successfully established
pub const SESSIONS_OPENED: &str = "firebird_wire_sessions_opened_total";
/// Session establishment failures
pub const SESSIONS_FAILED: &str = "firebird_wire_sessions_failed_total";
/// Sessions closed
pub const SESSIONS_CLOSED: &str = "firebird_wire_sessions_closed_total";
/// Transactions begun
pub const TRANSACTIONS_BEGUN: &str = "firebird_wire_transactions_begun_total";
/// Transactions resolved (commit or rollback)
pub const TRANSACTIONS_RESOLVED: &str = "firebird_wire_transactions_resolved_total";
/// Statements dispatched
pub const STATEMENTS: &str = "firebird_wire_statements_total";
/// Failed teardown steps
pub const TEARDOWN_ERRORS: &str = "firebird_wire_teardown_errors_total";
/// Handshake duration
pub const HANDSHAKE_DURATION: &str = "firebird_wire_handshake_duration_ms";
/// Teardown duration
pub const TEARDOWN_DURATION: &str = "firebird_wire_teardown_duration_ms";

/// Attach to an existing database
pub const MODE_ATTACH: &str = "attach";
/// Create a new database
pub const MODE_CREATE: &str = "create";

/// Establishment stage: opening the transport
pub const STAGE_TRANSPORT: &str = "transport";
/// Establishment stage: connect/accept handshake
pub const STAGE_HANDSHAKE: &str = "handshake";
/// Establishment stage: attach/create
pub const STAGE_ATTACH: &str = "attach";
/// Establishment stage: default transaction
pub const STAGE_DEFAULT_TRANSACTION: &str = "default_transaction";

/// Transaction committed
pub const OUTCOME_COMMIT: &str = "commit";
/// Transaction committed by autocommit
pub const OUTCOME_AUTOCOMMIT: &str = "autocommit";
/// Transaction rolled back
pub const OUTCOME_ROLLBACK: &str = "rollback";

/// Statement kind: exec
pub const KIND_EXEC: &str = "exec";
/// Statement kind: query
pub const KIND_QUERY: &str = "query";

/// Statement succeeded
pub const STATUS_OK: &str = "ok";
/// Statement failed
pub const STATUS_ERROR: &str = "error";

/// Teardown step: rollback
pub const STEP_ROLLBACK: &str = "rollback";
/// Teardown step: detach
pub const STEP_DETACH: &str = "detach";
/// Teardown step: transport release
pub const STEP_RELEASE: &str = "release";
