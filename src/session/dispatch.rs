//! Statement dispatch

use super::core::Session;
use super::tx::Resolution;
use crate::metrics::labels;
use crate::protocol::constants::TIME_ZONE_QUERY;
use crate::protocol::WireProtocol;
use crate::statement::{Cursor, ExecResult, PrepareContext, Statement, Value};
use crate::timezone::{parse_catalog_row, TimeZoneSource, TimeZones};
use crate::transaction::Transaction;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

impl<P: WireProtocol> Session<P> {
    /// Prepare `sql` in the current transaction
    ///
    /// The caller owns the returned statement and must close it.
    pub async fn prepare(&mut self, sql: &str) -> Result<P::Statement> {
        self.state.ensure_ready()?;
        let transaction = self.transaction_for_call().await?;
        self.prepare_in(&transaction, sql).await
    }

    /// Execute a statement that returns no rows
    ///
    /// In autocommit mode the default transaction is committed after a
    /// successful execute, before the statement is released. Explicit
    /// transactions are left open.
    ///
    /// # Errors
    ///
    /// * `Error::Statement` if prepare or execute fails
    /// * `Error::Transaction` if there is no usable transaction or the
    ///   autocommit fails
    pub async fn exec(&mut self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        self.state.ensure_ready()?;
        let transaction = match self.transaction_for_call().await {
            Ok(transaction) => transaction,
            Err(e) => {
                crate::metrics::counters::statement(labels::KIND_EXEC, labels::STATUS_ERROR);
                return Err(e);
            }
        };

        let mut statement = match self.prepare_in(&transaction, sql).await {
            Ok(statement) => statement,
            Err(e) => {
                crate::metrics::counters::statement(labels::KIND_EXEC, labels::STATUS_ERROR);
                return Err(e);
            }
        };

        let result = match statement.exec(args).await {
            Ok(result) => result,
            Err(e) => {
                release(statement).await;
                crate::metrics::counters::statement(labels::KIND_EXEC, labels::STATUS_ERROR);
                return Err(statement_error("execute", e));
            }
        };

        if self.autocommit && transaction.autocommit {
            if let Err(e) = self.resolve(&transaction, Resolution::Autocommit).await {
                release(statement).await;
                crate::metrics::counters::statement(labels::KIND_EXEC, labels::STATUS_ERROR);
                return Err(e);
            }
        }

        release(statement).await;
        crate::metrics::counters::statement(labels::KIND_EXEC, labels::STATUS_OK);
        tracing::debug!(rows_affected = result.rows_affected, "exec complete");
        Ok(result)
    }

    /// Execute a statement and open its result set
    ///
    /// Never commits. The cursor owns the statement; the transaction stays
    /// open until resolved or the session closes.
    pub async fn query(&mut self, sql: &str, args: &[Value]) -> Result<Cursor<P::Statement>> {
        self.state.ensure_ready()?;
        let transaction = match self.transaction_for_call().await {
            Ok(transaction) => transaction,
            Err(e) => {
                crate::metrics::counters::statement(labels::KIND_QUERY, labels::STATUS_ERROR);
                return Err(e);
            }
        };

        let mut statement = match self.prepare_in(&transaction, sql).await {
            Ok(statement) => statement,
            Err(e) => {
                crate::metrics::counters::statement(labels::KIND_QUERY, labels::STATUS_ERROR);
                return Err(e);
            }
        };

        match statement.query(args).await {
            Ok(rows) => {
                crate::metrics::counters::statement(labels::KIND_QUERY, labels::STATUS_OK);
                Ok(Cursor::new(statement, rows, self.lower_column_names))
            }
            Err(e) => {
                release(statement).await;
                crate::metrics::counters::statement(labels::KIND_QUERY, labels::STATUS_ERROR);
                Err(statement_error("open result set", e))
            }
        }
    }

    /// Time-zone names known to this session
    pub fn time_zones(&self) -> &TimeZones {
        &self.time_zones
    }

    /// Reload time-zone names from the server catalog
    ///
    /// Falls back to the built-in table when the catalog cannot be read or
    /// is empty. Returns the source now in use.
    pub async fn refresh_time_zones(&mut self) -> TimeZoneSource {
        match self.load_time_zone_catalog().await {
            Ok(zones) if !zones.is_empty() => {
                tracing::debug!(count = zones.len(), "loaded time zones from catalog");
                self.time_zones = TimeZones::from_catalog(zones);
            }
            Ok(_) => {
                tracing::debug!("time zone catalog empty, using built-in table");
                self.time_zones = TimeZones::builtin();
            }
            Err(e) => {
                tracing::warn!("cannot read time zone catalog, using built-in table: {}", e);
                self.time_zones = TimeZones::builtin();
            }
        }
        self.time_zones.source()
    }

    async fn load_time_zone_catalog(&mut self) -> Result<HashMap<u16, String>> {
        let mut cursor = self.query(TIME_ZONE_QUERY, &[]).await?;
        let mut zones = HashMap::new();
        loop {
            let row = match cursor.next().await {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) => {
                    release_cursor(cursor).await;
                    return Err(e);
                }
            };
            match parse_catalog_row(&row) {
                Ok((id, name)) => {
                    zones.insert(id, name);
                }
                Err(e) => {
                    release_cursor(cursor).await;
                    return Err(e);
                }
            }
        }
        cursor.close().await?;
        Ok(zones)
    }

    async fn prepare_in(&self, transaction: &Transaction, sql: &str) -> Result<P::Statement> {
        let context = PrepareContext {
            transaction: transaction.handle,
            lower_column_names: self.lower_column_names,
        };
        tracing::debug!(transaction = %transaction.handle, sql, "prepare");
        <P::Statement as Statement>::prepare(Arc::clone(&self.wire), context, sql)
            .await
            .map_err(|e| statement_error("prepare", e))
    }
}

async fn release<S: Statement>(statement: S) {
    if let Err(e) = statement.close().await {
        tracing::warn!("failed to release statement: {}", e);
    }
}

async fn release_cursor<S: Statement>(cursor: Cursor<S>) {
    if let Err(e) = cursor.close().await {
        tracing::warn!("failed to release cursor: {}", e);
    }
}

fn statement_error(action: &str, error: Error) -> Error {
    match error {
        Error::Statement(_) => error,
        other => Error::Statement(format!("{} failed: {}", action, other)),
    }
}
