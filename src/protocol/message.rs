//! Protocol request and response types

use crate::auth::ClientSeed;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;

/// Server-assigned database attachment handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseHandle(pub i32);

/// Server-assigned transaction handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHandle(pub i32);

impl fmt::Display for DatabaseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "db#{}", self.0)
    }
}

impl fmt::Display for TransactionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tr#{}", self.0)
    }
}

/// Connect negotiation payload (`op_connect` / `op_accept`)
#[derive(Debug, Clone)]
pub struct ConnectRequest<'a> {
    /// Database path or alias
    pub database: &'a str,
    /// User name
    pub user: &'a str,
    /// Password
    pub password: &'a str,
    /// Raw connection options, including `auth_plugin_name`
    pub options: &'a HashMap<String, String>,
    /// Ephemeral key-exchange material
    pub seed: &'a ClientSeed,
}

/// Attach/create payload
#[derive(Debug, Clone)]
pub struct AttachRequest<'a> {
    /// Database path or alias
    pub database: &'a str,
    /// User name
    pub user: &'a str,
    /// Password
    pub password: &'a str,
    /// SQL role, if any
    pub role: Option<&'a str>,
}

/// Result of a completed `op_accept` exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Negotiated protocol version
    pub protocol_version: i32,
    /// Authentication plugin chosen by the server
    pub plugin: String,
}

/// Generic response packet (`op_response`)
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Object handle (database, transaction or statement)
    pub handle: i32,
    /// Object id (blob id, etc.)
    pub object_id: u64,
    /// Response payload
    pub data: Bytes,
}

impl Response {
    /// Response carrying only a handle
    pub fn with_handle(handle: i32) -> Self {
        Self {
            handle,
            ..Self::default()
        }
    }
}
