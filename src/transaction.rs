//! Transaction model
//!
//! Isolation levels, transaction parameter buffers and the per-session record
//! of open transaction handles.

use crate::protocol::constants::tpb;
use crate::protocol::TransactionHandle;
use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Transaction isolation level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    /// Read committed, waiting on uncommitted record versions
    ReadCommittedLegacy,
    /// Read committed, reading the latest committed version
    #[default]
    ReadCommitted,
    /// Snapshot isolation
    RepeatableRead,
    /// Table-stability isolation
    Serializable,
    /// Read-only read committed
    ReadCommittedReadOnly,
}

impl IsolationLevel {
    /// Transaction parameter buffer for this level
    pub fn tpb(self, autocommit: bool) -> Vec<u8> {
        let mut buf = match self {
            Self::ReadCommittedLegacy => vec![
                tpb::VERSION3,
                tpb::WRITE,
                tpb::WAIT,
                tpb::READ_COMMITTED,
                tpb::NO_REC_VERSION,
            ],
            Self::ReadCommitted => vec![
                tpb::VERSION3,
                tpb::WRITE,
                tpb::WAIT,
                tpb::READ_COMMITTED,
                tpb::REC_VERSION,
            ],
            Self::RepeatableRead => vec![tpb::VERSION3, tpb::WRITE, tpb::WAIT, tpb::CONCURRENCY],
            Self::Serializable => vec![tpb::VERSION3, tpb::WRITE, tpb::WAIT, tpb::CONSISTENCY],
            Self::ReadCommittedReadOnly => vec![
                tpb::VERSION3,
                tpb::READ,
                tpb::WAIT,
                tpb::READ_COMMITTED,
                tpb::REC_VERSION,
            ],
        };
        if autocommit {
            buf.push(tpb::AUTOCOMMIT);
        }
        buf
    }

    /// Metrics/log label
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadCommittedLegacy => "read_committed_legacy",
            Self::ReadCommitted => "read_committed",
            Self::RepeatableRead => "repeatable_read",
            Self::Serializable => "serializable",
            Self::ReadCommittedReadOnly => "read_committed_read_only",
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IsolationLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "read_committed_legacy" => Ok(Self::ReadCommittedLegacy),
            "read_committed" => Ok(Self::ReadCommitted),
            "repeatable_read" | "snapshot" => Ok(Self::RepeatableRead),
            "serializable" => Ok(Self::Serializable),
            "read_committed_read_only" | "read_committed_ro" => Ok(Self::ReadCommittedReadOnly),
            _ => Err(Error::Config(format!(
                "invalid isolation_level '{}': expected read_committed_legacy, read_committed, \
                 repeatable_read, serializable, or read_committed_read_only",
                s
            ))),
        }
    }
}

/// A transaction begun on a session
///
/// The value is a token: commit and rollback go through the owning session,
/// identified by `session_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) handle: TransactionHandle,
    pub(crate) isolation: IsolationLevel,
    pub(crate) autocommit: bool,
    pub(crate) session_id: u64,
    pub(crate) serial: u64,
}

impl Transaction {
    /// Server-assigned handle
    pub fn handle(&self) -> TransactionHandle {
        self.handle
    }

    /// Isolation level requested at begin
    pub fn isolation(&self) -> IsolationLevel {
        self.isolation
    }

    /// Whether the driver commits this transaction after each exec
    pub fn is_autocommit(&self) -> bool {
        self.autocommit
    }

    /// Id of the session that began this transaction
    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Begin number within the session, starting at 1
    ///
    /// Tells apart transactions that were given the same server handle.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Open transaction handles of one session, in begin order
///
/// Each entry carries the serial assigned at insert, so a handle the server
/// hands out again after resolution is not confused with its predecessor.
#[derive(Debug, Default)]
pub struct TransactionSet {
    open: Vec<(TransactionHandle, u64)>,
    begun: u64,
    resolved: u64,
}

impl TransactionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a handle returned by a begin and return its serial
    pub fn insert(&mut self, handle: TransactionHandle) -> Result<u64> {
        if self.contains(handle) {
            return Err(Error::Transaction(format!(
                "server returned handle {} which is already open",
                handle
            )));
        }
        self.begun += 1;
        self.open.push((handle, self.begun));
        Ok(self.begun)
    }

    /// Forget a handle after the server acknowledged commit or rollback
    pub fn remove(&mut self, handle: TransactionHandle) -> bool {
        match self.open.iter().position(|(h, _)| *h == handle) {
            Some(pos) => {
                self.open.remove(pos);
                self.resolved += 1;
                true
            }
            None => false,
        }
    }

    /// Whether the handle is still open
    pub fn contains(&self, handle: TransactionHandle) -> bool {
        self.open.iter().any(|(h, _)| *h == handle)
    }

    /// Whether the handle is open under the given serial
    pub fn is_open(&self, handle: TransactionHandle, serial: u64) -> bool {
        self.open.contains(&(handle, serial))
    }

    /// Take every open handle, in begin order, leaving the set empty
    pub fn drain(&mut self) -> Vec<TransactionHandle> {
        let handles: Vec<_> = std::mem::take(&mut self.open)
            .into_iter()
            .map(|(h, _)| h)
            .collect();
        self.resolved += handles.len() as u64;
        handles
    }

    /// Open handles in begin order
    pub fn iter(&self) -> impl Iterator<Item = TransactionHandle> + '_ {
        self.open.iter().map(|(h, _)| *h)
    }

    /// Number of open handles
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no handle is open
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Handles recorded since the session started
    pub fn begun(&self) -> u64 {
        self.begun
    }

    /// Handles resolved (acknowledged or drained for teardown)
    pub fn resolved(&self) -> u64 {
        self.resolved
    }
}
