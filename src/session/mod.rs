//! Session lifecycle
//!
//! * Establishment: transport, handshake, attach/create, default transaction
//! * Transaction coordination
//! * Statement dispatch
//! * Teardown

mod config;
mod core;
mod dispatch;
mod state;
mod teardown;
mod tx;

pub use self::config::{
    SessionConfig, SessionConfigBuilder, OPT_AUTH_PLUGIN_NAME, OPT_AUTOCOMMIT,
    OPT_COLUMN_NAME_TO_LOWER, OPT_ISOLATION_LEVEL, OPT_ROLE,
};
pub use self::core::Session;
pub use self::state::SessionState;
