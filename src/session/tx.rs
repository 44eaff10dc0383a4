//! Transaction coordination

use super::core::Session;
use crate::metrics::labels;
use crate::protocol::{TransactionHandle, WireProtocol};
use crate::transaction::{IsolationLevel, Transaction};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Resolution {
    Commit,
    Autocommit,
    Rollback,
}

impl Resolution {
    fn label(self) -> &'static str {
        match self {
            Resolution::Commit => labels::OUTCOME_COMMIT,
            Resolution::Autocommit => labels::OUTCOME_AUTOCOMMIT,
            Resolution::Rollback => labels::OUTCOME_ROLLBACK,
        }
    }
}

/// Request sent on the wire whose response has not been read yet
///
/// Set between a request and its `op_response`. It is still set afterwards
/// only when the future running the exchange was dropped in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InFlight {
    Begin,
    Resolve(TransactionHandle),
}

impl<P: WireProtocol> Session<P> {
    /// Begin an explicit transaction and make it current
    ///
    /// The previous current transaction, if any, stays open and is still
    /// rolled back at close unless resolved earlier. Explicit transactions
    /// are never committed by `exec`.
    pub async fn begin(&mut self, isolation: IsolationLevel) -> Result<Transaction> {
        self.state.ensure_ready()?;
        self.begin_with(isolation, false).await
    }

    /// Commit `transaction`
    ///
    /// The handle is forgotten only once the server acknowledged the commit.
    pub async fn commit(&mut self, transaction: &Transaction) -> Result<()> {
        self.resolve(transaction, Resolution::Commit).await
    }

    /// Roll back `transaction`
    pub async fn rollback(&mut self, transaction: &Transaction) -> Result<()> {
        self.resolve(transaction, Resolution::Rollback).await
    }

    /// Commit the current transaction
    pub async fn commit_current(&mut self) -> Result<()> {
        let transaction = self.current.ok_or_else(no_active_transaction)?;
        self.commit(&transaction).await
    }

    /// Roll back the current transaction
    pub async fn rollback_current(&mut self) -> Result<()> {
        let transaction = self.current.ok_or_else(no_active_transaction)?;
        self.rollback(&transaction).await
    }

    pub(super) async fn begin_with(
        &mut self,
        isolation: IsolationLevel,
        autocommit: bool,
    ) -> Result<Transaction> {
        self.settle().await;

        let tpb = isolation.tpb(autocommit);
        let handle = {
            let mut wire = self.wire.lock().await;
            request_transaction(&mut *wire, &tpb, &mut self.in_flight).await?
        };
        let serial = self.transactions.insert(handle)?;

        let transaction = Transaction {
            handle,
            isolation,
            autocommit,
            session_id: self.id,
            serial,
        };
        self.current = Some(transaction);
        crate::metrics::counters::transaction_begun(isolation.as_str());
        tracing::debug!(transaction = %handle, serial, %isolation, autocommit, "transaction begun");
        Ok(transaction)
    }

    /// Transaction for the next statement
    ///
    /// A session in autocommit mode whose current transaction was resolved
    /// gets a fresh default transaction.
    pub(super) async fn transaction_for_call(&mut self) -> Result<Transaction> {
        self.settle().await;
        if let Some(transaction) = self.current {
            return Ok(transaction);
        }
        if !self.autocommit {
            return Err(no_active_transaction());
        }
        tracing::debug!("renewing default transaction");
        self.begin_with(self.isolation, true).await
    }

    pub(super) async fn resolve(
        &mut self,
        transaction: &Transaction,
        resolution: Resolution,
    ) -> Result<()> {
        self.state.ensure_ready()?;
        self.settle().await;
        self.check_owned(transaction)?;

        let handle = transaction.handle;
        {
            let mut wire = self.wire.lock().await;
            let sent = match resolution {
                Resolution::Commit | Resolution::Autocommit => wire.op_commit(handle).await,
                Resolution::Rollback => wire.op_rollback(handle).await,
            };
            sent.map_err(|e| transaction_error(resolution.label(), handle, e))?;
            self.in_flight = Some(InFlight::Resolve(handle));
            let response = wire.op_response().await;
            self.in_flight = None;
            response.map_err(|e| transaction_error(resolution.label(), handle, e))?;
        }

        self.forget(handle);
        crate::metrics::counters::transaction_resolved(resolution.label());
        tracing::debug!(transaction = %handle, outcome = resolution.label(), "transaction resolved");
        Ok(())
    }

    /// Read the response left behind by an abandoned exchange
    ///
    /// An acknowledged begin is recorded so close rolls it back; an
    /// acknowledged commit or rollback forgets its handle.
    pub(super) async fn settle(&mut self) {
        let in_flight = match self.in_flight {
            Some(in_flight) => in_flight,
            None => return,
        };
        let response = {
            let mut wire = self.wire.lock().await;
            wire.op_response().await
        };
        self.in_flight = None;

        match (in_flight, response) {
            (InFlight::Begin, Ok(response)) => {
                let handle = TransactionHandle(response.handle);
                match self.transactions.insert(handle) {
                    Ok(_) => tracing::warn!(
                        transaction = %handle,
                        "recorded transaction from an abandoned begin"
                    ),
                    Err(e) => tracing::warn!("abandoned begin: {}", e),
                }
            }
            (InFlight::Resolve(handle), Ok(_)) => {
                self.forget(handle);
                tracing::warn!(transaction = %handle, "abandoned commit/rollback was acknowledged");
            }
            (_, Err(e)) => {
                tracing::warn!(?in_flight, "abandoned exchange failed: {}", e);
            }
        }
    }

    fn forget(&mut self, handle: TransactionHandle) {
        self.transactions.remove(handle);
        if self.current.map(|c| c.handle) == Some(handle) {
            self.current = None;
        }
    }

    fn check_owned(&self, transaction: &Transaction) -> Result<()> {
        if transaction.session_id != self.id {
            return Err(Error::Transaction(format!(
                "transaction {} belongs to session {}, not {}",
                transaction.handle, transaction.session_id, self.id
            )));
        }
        if !self
            .transactions
            .is_open(transaction.handle, transaction.serial)
        {
            return Err(Error::Transaction(format!(
                "transaction {} is not open",
                transaction.handle
            )));
        }
        Ok(())
    }
}

/// Send a transaction request and read the handle the server assigned
///
/// `in_flight` is marked while the response is outstanding.
pub(super) async fn request_transaction<P: WireProtocol>(
    wire: &mut P,
    tpb: &[u8],
    in_flight: &mut Option<InFlight>,
) -> Result<TransactionHandle> {
    wire.op_transaction(tpb)
        .await
        .map_err(|e| Error::Transaction(format!("begin failed: {}", e)))?;
    *in_flight = Some(InFlight::Begin);
    let response = wire.op_response().await;
    *in_flight = None;
    let response =
        response.map_err(|e| Error::Transaction(format!("server declined transaction: {}", e)))?;
    Ok(TransactionHandle(response.handle))
}

fn transaction_error(action: &str, handle: TransactionHandle, error: Error) -> Error {
    Error::Transaction(format!("{} of {} failed: {}", action, handle, error))
}

pub(super) fn no_active_transaction() -> Error {
    Error::Transaction("no active transaction".into())
}
