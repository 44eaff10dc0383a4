//! Scripted operation layer for tests
//!
//! `MockConnector` hands out `MockWire`s that record every operation in a
//! shared call log and answer from a small script: which steps fail, which
//! plugin the server picks, and the result set returned by queries. The mock
//! enforces strict half-duplex ordering: sending a request while a response
//! is still pending, or reading a response nobody asked for, is a protocol
//! error.

use crate::protocol::{
    Accepted, AttachRequest, ConnectRequest, Connector, DatabaseHandle, Response, SharedWire,
    TransactionHandle, WireProtocol,
};
use crate::statement::{ExecResult, PrepareContext, Rows, Statement, Value};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Database handle returned by every mock attach/create
pub const MOCK_DATABASE: DatabaseHandle = DatabaseHandle(1);

/// Protocol version reported by the mock accept
pub const MOCK_PROTOCOL_VERSION: i32 = 17;

/// Initialise test logging from `RUST_LOG`
///
/// Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Transport opened
    Connect(String),
    /// `op_connect` sent
    OpConnect {
        /// Plugin list offered
        plugins: String,
    },
    /// `op_accept` exchange
    Accept,
    /// `op_attach` sent
    Attach {
        /// Database path
        database: String,
        /// SQL role
        role: Option<String>,
    },
    /// `op_create` sent
    Create {
        /// Database path
        database: String,
        /// SQL role
        role: Option<String>,
    },
    /// `op_transaction` sent with this TPB
    Transaction(Vec<u8>),
    /// `op_commit` sent
    Commit(TransactionHandle),
    /// `op_rollback` sent
    Rollback(TransactionHandle),
    /// `op_detach` sent
    Detach(DatabaseHandle),
    /// `op_response` read
    Response,
    /// Statement prepared
    Prepare {
        /// SQL text
        sql: String,
        /// Transaction the statement runs in
        transaction: TransactionHandle,
    },
    /// Statement executed
    Execute(String),
    /// Result set opened
    Query(String),
    /// Row fetched
    Fetch,
    /// Statement released
    CloseStatement(String),
    /// Transport released
    CloseTransport,
}

/// Step the script makes fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// Transport cannot be opened
    Connect,
    /// Transport drops while sending `op_connect`
    OpConnect,
    /// Credentials rejected in `op_accept`
    Accept,
    /// Server refuses attach/create
    AttachResponse,
    /// Server declines `op_transaction`
    TransactionResponse,
    /// Server fails `op_commit`
    CommitResponse,
    /// Server fails `op_rollback`
    RollbackResponse,
    /// Server fails `op_detach`
    DetachResponse,
    /// Transport release fails
    CloseTransport,
    /// Statement prepare fails
    Prepare,
    /// Statement execute fails
    Execute,
    /// Opening the result set fails
    Query,
    /// Fetching a row fails
    Fetch,
    /// Releasing a statement fails
    CloseStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Attach,
    Transaction,
    Commit,
    Rollback,
    Detach,
}

#[derive(Debug)]
struct Script {
    calls: Vec<Call>,
    faults: HashSet<Fault>,
    plugin: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    rows_affected: u64,
    next_transaction: i32,
    reissue: Option<i32>,
    slow_responses: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            faults: HashSet::new(),
            plugin: "Srp256".to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
            rows_affected: 1,
            next_transaction: 1,
            reissue: None,
            slow_responses: false,
        }
    }
}

type SharedScript = Arc<Mutex<Script>>;

fn lock(script: &SharedScript) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Connector handing out scripted wires
///
/// Clones share the script and the call log.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    script: SharedScript,
}

impl MockConnector {
    /// Connector where every step succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `fault` fail from now on
    pub fn fail(self, fault: Fault) -> Self {
        self.inject(fault);
        self
    }

    /// Make `fault` fail from now on, without consuming the connector
    pub fn inject(&self, fault: Fault) {
        lock(&self.script).faults.insert(fault);
    }

    /// Stop failing `fault`
    pub fn heal(&self, fault: Fault) {
        lock(&self.script).faults.remove(&fault);
    }

    /// Plugin the server picks in `op_accept`
    pub fn server_plugin(self, plugin: impl Into<String>) -> Self {
        lock(&self.script).plugin = plugin.into();
        self
    }

    /// Result set returned by every query
    pub fn result_set<I, S>(self, columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut script = lock(&self.script);
            script.columns = columns.into_iter().map(Into::into).collect();
            script.rows = rows;
        }
        self
    }

    /// Row count reported by every exec
    pub fn rows_affected(self, count: u64) -> Self {
        lock(&self.script).rows_affected = count;
        self
    }

    /// Answer the next `op_transaction` with `handle` again
    ///
    /// Mimics a server reusing the handle of a resolved transaction.
    pub fn reissue_handle(&self, handle: TransactionHandle) {
        lock(&self.script).reissue = Some(handle.0);
    }

    /// Yield to the runtime once inside every `op_response`
    ///
    /// Lets a test drop an operation between a request and its response.
    pub fn slow_responses(&self, enabled: bool) {
        lock(&self.script).slow_responses = enabled;
    }

    /// Every recorded operation, in order
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.script).calls.clone()
    }

    /// Recorded operations other than `op_response` reads
    pub fn requests(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::Response)
            .collect()
    }

    /// Forget the recorded operations
    pub fn clear_calls(&self) {
        lock(&self.script).calls.clear();
    }

    /// Number of recorded operations matching `predicate`
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        lock(&self.script).calls.iter().filter(|c| predicate(c)).count()
    }

    /// Handles passed to `op_commit`, in order
    pub fn commits(&self) -> Vec<TransactionHandle> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Commit(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    /// Handles passed to `op_rollback`, in order
    pub fn rollbacks(&self) -> Vec<TransactionHandle> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Rollback(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    /// Fresh handles assigned by `op_transaction` responses so far
    pub fn begun(&self) -> Vec<TransactionHandle> {
        let next = lock(&self.script).next_transaction;
        (1..next).map(TransactionHandle).collect()
    }

    /// Number of transport releases
    pub fn transport_releases(&self) -> usize {
        self.count(|c| *c == Call::CloseTransport)
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Wire = MockWire;

    async fn connect(&self, address: &str) -> Result<MockWire> {
        let mut script = lock(&self.script);
        script.calls.push(Call::Connect(address.to_string()));
        if script.faults.contains(&Fault::Connect) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        Ok(MockWire {
            script: Arc::clone(&self.script),
            pending: None,
            closed: false,
        })
    }
}

/// Scripted operation layer
#[derive(Debug)]
pub struct MockWire {
    script: SharedScript,
    pending: Option<Pending>,
    closed: bool,
}

impl MockWire {
    fn request(&mut self, call: Call, pending: Option<Pending>) -> Result<()> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        if let Some(waiting) = self.pending {
            return Err(Error::Protocol(format!(
                "request {:?} sent while response to {:?} is pending",
                call, waiting
            )));
        }
        lock(&self.script).calls.push(call);
        self.pending = pending;
        Ok(())
    }

    fn faulty(&self, fault: Fault) -> bool {
        lock(&self.script).faults.contains(&fault)
    }

    fn record(&self, call: Call) -> Result<()> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        lock(&self.script).calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl WireProtocol for MockWire {
    type Statement = MockStatement;

    async fn op_connect(&mut self, request: &ConnectRequest<'_>) -> Result<()> {
        let plugins = request
            .options
            .get(crate::session::OPT_AUTH_PLUGIN_NAME)
            .cloned()
            .unwrap_or_default();
        self.request(Call::OpConnect { plugins }, None)?;
        if self.faulty(Fault::OpConnect) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "connection reset during connect",
            )));
        }
        Ok(())
    }

    async fn op_accept(&mut self, _request: &ConnectRequest<'_>) -> Result<Accepted> {
        self.request(Call::Accept, None)?;
        if self.faulty(Fault::Accept) {
            return Err(Error::Server("Your user name and password are not defined".into()));
        }
        Ok(Accepted {
            protocol_version: MOCK_PROTOCOL_VERSION,
            plugin: lock(&self.script).plugin.clone(),
        })
    }

    async fn op_attach(&mut self, request: &AttachRequest<'_>) -> Result<()> {
        self.request(
            Call::Attach {
                database: request.database.to_string(),
                role: request.role.map(str::to_string),
            },
            Some(Pending::Attach),
        )
    }

    async fn op_create(&mut self, request: &AttachRequest<'_>) -> Result<()> {
        self.request(
            Call::Create {
                database: request.database.to_string(),
                role: request.role.map(str::to_string),
            },
            Some(Pending::Attach),
        )
    }

    async fn op_transaction(&mut self, tpb: &[u8]) -> Result<()> {
        self.request(Call::Transaction(tpb.to_vec()), Some(Pending::Transaction))
    }

    async fn op_commit(&mut self, transaction: TransactionHandle) -> Result<()> {
        self.request(Call::Commit(transaction), Some(Pending::Commit))
    }

    async fn op_rollback(&mut self, transaction: TransactionHandle) -> Result<()> {
        self.request(Call::Rollback(transaction), Some(Pending::Rollback))
    }

    async fn op_detach(&mut self, database: DatabaseHandle) -> Result<()> {
        self.request(Call::Detach(database), Some(Pending::Detach))
    }

    async fn op_response(&mut self) -> Result<Response> {
        if self.closed {
            return Err(Error::ConnectionClosed);
        }
        let slow = lock(&self.script).slow_responses;
        if slow {
            tokio::task::yield_now().await;
        }
        let pending = self
            .pending
            .take()
            .ok_or_else(|| Error::Protocol("response read without a request".into()))?;

        let mut script = lock(&self.script);
        script.calls.push(Call::Response);
        let faults = script.faults.clone();
        let failed = |fault| faults.contains(&fault);
        match pending {
            Pending::Attach if failed(Fault::AttachResponse) => {
                Err(Error::Server("I/O error during open of database file".into()))
            }
            Pending::Attach => Ok(Response::with_handle(MOCK_DATABASE.0)),
            Pending::Transaction if failed(Fault::TransactionResponse) => {
                Err(Error::Server("lock time-out on wait transaction".into()))
            }
            Pending::Transaction => {
                let handle = match script.reissue.take() {
                    Some(handle) => handle,
                    None => {
                        let handle = script.next_transaction;
                        script.next_transaction += 1;
                        handle
                    }
                };
                Ok(Response::with_handle(handle))
            }
            Pending::Commit if failed(Fault::CommitResponse) => {
                Err(Error::Server("update conflicts with concurrent update".into()))
            }
            Pending::Rollback if failed(Fault::RollbackResponse) => {
                Err(Error::Server("invalid transaction handle".into()))
            }
            Pending::Detach if failed(Fault::DetachResponse) => {
                Err(Error::Server("cannot disconnect database with open transactions".into()))
            }
            Pending::Commit | Pending::Rollback | Pending::Detach => Ok(Response::default()),
        }
    }

    async fn close(&mut self) -> Result<()> {
        lock(&self.script).calls.push(Call::CloseTransport);
        self.closed = true;
        self.pending = None;
        if self.faulty(Fault::CloseTransport) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "socket shutdown failed",
            )));
        }
        Ok(())
    }
}

/// Statement prepared through a `MockWire`
#[derive(Debug)]
pub struct MockStatement {
    wire: SharedWire<MockWire>,
    sql: String,
    lower_column_names: bool,
}

impl MockStatement {
    /// SQL text this statement was prepared with
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

#[async_trait]
impl Statement for MockStatement {
    type Wire = MockWire;
    type Rows = MockRows;

    async fn prepare(
        wire: SharedWire<MockWire>,
        context: PrepareContext,
        sql: &str,
    ) -> Result<Self> {
        {
            let guard = wire.lock().await;
            guard.record(Call::Prepare {
                sql: sql.to_string(),
                transaction: context.transaction,
            })?;
            if guard.faulty(Fault::Prepare) {
                return Err(Error::Server(format!("Dynamic SQL Error: {}", sql)));
            }
        }
        Ok(Self {
            wire,
            sql: sql.to_string(),
            lower_column_names: context.lower_column_names,
        })
    }

    async fn exec(&mut self, _args: &[Value]) -> Result<ExecResult> {
        let guard = self.wire.lock().await;
        guard.record(Call::Execute(self.sql.clone()))?;
        if guard.faulty(Fault::Execute) {
            return Err(Error::Server("violation of PRIMARY or UNIQUE KEY constraint".into()));
        }
        let rows_affected = lock(&guard.script).rows_affected;
        Ok(ExecResult { rows_affected })
    }

    async fn query(&mut self, _args: &[Value]) -> Result<MockRows> {
        let guard = self.wire.lock().await;
        guard.record(Call::Query(self.sql.clone()))?;
        if guard.faulty(Fault::Query) {
            return Err(Error::Server("table unknown".into()));
        }
        let script = lock(&guard.script);
        let columns = if self.lower_column_names {
            script.columns.iter().map(|c| c.to_lowercase()).collect()
        } else {
            script.columns.clone()
        };
        Ok(MockRows {
            wire: Arc::clone(&self.wire),
            columns,
            rows: script.rows.iter().cloned().collect(),
        })
    }

    async fn close(self) -> Result<()> {
        let guard = self.wire.lock().await;
        guard.record(Call::CloseStatement(self.sql.clone()))?;
        if guard.faulty(Fault::CloseStatement) {
            return Err(Error::Server("invalid statement handle".into()));
        }
        Ok(())
    }
}

/// Result set of a `MockStatement`
#[derive(Debug)]
pub struct MockRows {
    wire: SharedWire<MockWire>,
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
}

#[async_trait]
impl Rows for MockRows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next_row(&mut self) -> Result<Option<Vec<Value>>> {
        let guard = self.wire.lock().await;
        guard.record(Call::Fetch)?;
        if guard.faulty(Fault::Fetch) {
            return Err(Error::Server("fetch failed".into()));
        }
        Ok(self.rows.pop_front())
    }
}
