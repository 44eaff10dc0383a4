//! Session lifecycle and transaction coordination for the Firebird remote protocol
//!
//! `firebird-wire` sequences the connect/accept/attach handshake, keeps an
//! implicit autocommit transaction next to explicit ones, dispatches
//! statements with the right commit timing and tears sessions down reliably.
//! Encoding individual protocol operations is left to a [`WireProtocol`]
//! implementation opened by a [`Connector`].
//!
//! ```no_run
//! use firebird_wire::{Connector, Session, SessionConfig, Value};
//!
//! async fn example<C: Connector>(connector: &C) -> firebird_wire::Result<()> {
//!     let config = SessionConfig::builder("localhost:3050", "employee", "SYSDBA")
//!         .password("masterkey")
//!         .build();
//!     let mut session = Session::attach(connector, &config).await?;
//!
//!     session.exec("UPDATE counters SET n = n + 1", &[]).await?;
//!
//!     let mut cursor = session
//!         .query("SELECT id, name FROM users WHERE id = ?", &[Value::Int(1)])
//!         .await?;
//!     while let Some(row) = cursor.next().await? {
//!         println!("{:?}", row);
//!     }
//!     cursor.close().await?;
//!
//!     session.close().await
//! }
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod error;
pub mod metrics;
pub mod protocol;
pub mod session;
pub mod statement;
pub mod timezone;
pub mod transaction;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use protocol::{Connector, DatabaseHandle, SharedWire, TransactionHandle, WireProtocol};
pub use session::{Session, SessionConfig, SessionConfigBuilder, SessionState};
pub use statement::{Cursor, ExecResult, PrepareContext, Rows, Statement, Value};
pub use timezone::{TimeZoneSource, TimeZones};
pub use transaction::{IsolationLevel, Transaction, TransactionSet};
