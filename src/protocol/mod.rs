//! Transport operation layer
//!
//! This module defines the seam between the session layer and the code that
//! encodes individual Firebird operations on the wire:
//! * `Connector` opens a transport for an address
//! * `WireProtocol` sends one request at a time and reads its paired response
//! * Request/response payload types and server handles
//!
//! The protocol is strictly half-duplex: every request must be followed by
//! exactly one `op_response` call before the next request is sent.

pub mod constants;
mod message;

pub use message::{
    Accepted, AttachRequest, ConnectRequest, DatabaseHandle, Response, TransactionHandle,
};

use crate::statement::Statement;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Operation layer shared between a session and the cursors it hands out
pub type SharedWire<P> = Arc<Mutex<P>>;

/// Opens a transport and returns the operation layer bound to it
#[async_trait]
pub trait Connector: Send + Sync {
    /// Operation layer produced by this connector
    type Wire: WireProtocol;

    /// Open the transport to `address`
    async fn connect(&self, address: &str) -> Result<Self::Wire>;
}

/// Individual protocol operations over one ordered, connection-oriented channel
///
/// Request methods only send. The paired result is read with
/// [`WireProtocol::op_response`], except for `op_accept` which performs its own
/// exchange.
#[async_trait]
pub trait WireProtocol: Send + 'static {
    /// Statement collaborator bound to this operation layer
    type Statement: Statement<Wire = Self>;

    /// Send the connect negotiation carrying the client public value
    async fn op_connect(&mut self, request: &ConnectRequest<'_>) -> Result<()>;

    /// Receive the server's protocol/plugin choice and complete the key exchange
    async fn op_accept(&mut self, request: &ConnectRequest<'_>) -> Result<Accepted>;

    /// Request attachment to an existing database
    async fn op_attach(&mut self, request: &AttachRequest<'_>) -> Result<()>;

    /// Request creation of a new database
    async fn op_create(&mut self, request: &AttachRequest<'_>) -> Result<()>;

    /// Request a new transaction described by a transaction parameter buffer
    async fn op_transaction(&mut self, tpb: &[u8]) -> Result<()>;

    /// Request commit of a transaction
    async fn op_commit(&mut self, transaction: TransactionHandle) -> Result<()>;

    /// Request rollback of a transaction
    async fn op_rollback(&mut self, transaction: TransactionHandle) -> Result<()>;

    /// Request detachment from the database
    async fn op_detach(&mut self, database: DatabaseHandle) -> Result<()>;

    /// Read the response paired with the last request
    async fn op_response(&mut self) -> Result<Response>;

    /// Release the transport
    async fn close(&mut self) -> Result<()>;
}
