//! Statement and cursor collaborators
//!
//! The session prepares statements through the `Statement` trait implemented
//! alongside a `WireProtocol`. Statements handed to `Session::query` end up
//! inside a `Cursor`, which owns them until closed.

use crate::protocol::{SharedWire, TransactionHandle, WireProtocol};
use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, Stream};

/// Parameter or column value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Integer types up to 64 bits
    Int(i64),
    /// Floating point
    Double(f64),
    /// Character data
    Text(String),
    /// Binary data
    Bytes(Bytes),
}

impl Value {
    /// Integer view of the value, if it holds one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// String view of the value, if it holds text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Outcome of an executed statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows inserted, updated or deleted
    pub rows_affected: u64,
}

/// What a statement needs from the session to prepare itself
#[derive(Debug, Clone, Copy)]
pub struct PrepareContext {
    /// Transaction the statement runs in
    pub transaction: TransactionHandle,
    /// Whether column names are reported in lower case
    pub lower_column_names: bool,
}

/// Prepared statement bound to an operation layer
#[async_trait]
pub trait Statement: Send + Sized + 'static {
    /// Operation layer this statement talks through
    type Wire: WireProtocol;
    /// Open result set
    type Rows: Rows;

    /// Allocate and prepare `sql` in the given transaction
    async fn prepare(
        wire: SharedWire<Self::Wire>,
        context: PrepareContext,
        sql: &str,
    ) -> Result<Self>;

    /// Execute a non-row-returning statement
    async fn exec(&mut self, args: &[Value]) -> Result<ExecResult>;

    /// Execute and open a result set
    async fn query(&mut self, args: &[Value]) -> Result<Self::Rows>;

    /// Release the server-side statement
    async fn close(self) -> Result<()>;
}

/// Open result set of a statement
#[async_trait]
pub trait Rows: Send + 'static {
    /// Column names as reported by the server
    fn columns(&self) -> &[String];

    /// Fetch the next row, `None` once exhausted
    async fn next_row(&mut self) -> Result<Option<Vec<Value>>>;
}

/// Readable result of `Session::query`
///
/// Owns the statement that produced it. Its transaction stays open until the
/// caller commits or rolls it back, or the session closes.
pub struct Cursor<S: Statement> {
    statement: S,
    rows: S::Rows,
    columns: Vec<String>,
}

impl<S: Statement> Cursor<S> {
    pub(crate) fn new(statement: S, rows: S::Rows, lower_column_names: bool) -> Self {
        let columns = rows
            .columns()
            .iter()
            .map(|c| {
                if lower_column_names {
                    c.to_lowercase()
                } else {
                    c.clone()
                }
            })
            .collect();
        Self {
            statement,
            rows,
            columns,
        }
    }

    /// Column names, lower-cased when the session asked for it
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Fetch the next row
    pub async fn next(&mut self) -> Result<Option<Vec<Value>>> {
        self.rows.next_row().await
    }

    /// Release the statement
    pub async fn close(self) -> Result<()> {
        drop(self.rows);
        self.statement.close().await
    }

    /// Turn the cursor into a row stream; the statement is released once the
    /// stream is exhausted or fails
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Value>>> + Send {
        stream::unfold(Some(self), |cursor| async move {
            let mut cursor = cursor?;
            match cursor.next().await {
                Ok(Some(row)) => Some((Ok(row), Some(cursor))),
                Ok(None) => {
                    if let Err(e) = cursor.close().await {
                        tracing::warn!("failed to release exhausted cursor: {}", e);
                    }
                    None
                }
                Err(e) => {
                    if let Err(close_err) = cursor.close().await {
                        tracing::warn!("failed to release failed cursor: {}", close_err);
                    }
                    Some((Err(e), None))
                }
            }
        })
    }
}

impl<S: Statement> std::fmt::Debug for Cursor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
