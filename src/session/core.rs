//! Session establishment and accessors

use super::config::SessionConfig;
use super::state::SessionState;
use super::tx::{request_transaction, InFlight};
use crate::auth::{self, ClientSeed};
use crate::metrics::labels;
use crate::protocol::{
    Accepted, AttachRequest, ConnectRequest, Connector, DatabaseHandle, SharedWire, WireProtocol,
};
use crate::timezone::TimeZones;
use crate::transaction::{IsolationLevel, Transaction, TransactionSet};
use crate::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::Instrument;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Attach,
    Create,
}

impl Mode {
    fn label(self) -> &'static str {
        match self {
            Mode::Attach => labels::MODE_ATTACH,
            Mode::Create => labels::MODE_CREATE,
        }
    }
}

/// Authenticated session attached to one database
///
/// Created by [`Session::attach`] or [`Session::create`], which return only
/// once the handshake succeeded and the default transaction is open. Release
/// it with [`Session::close`]; dropping an open session leaves server-side
/// transactions to be cleaned up when the transport goes away.
pub struct Session<P: WireProtocol> {
    pub(super) wire: SharedWire<P>,
    pub(super) id: u64,
    pub(super) database: DatabaseHandle,
    pub(super) accepted: Accepted,
    pub(super) seed: ClientSeed,
    pub(super) lower_column_names: bool,
    pub(super) autocommit: bool,
    pub(super) isolation: IsolationLevel,
    pub(super) current: Option<Transaction>,
    pub(super) transactions: TransactionSet,
    pub(super) state: SessionState,
    pub(super) time_zones: TimeZones,
    pub(super) in_flight: Option<InFlight>,
}

impl<P: WireProtocol> Session<P> {
    /// Connect, authenticate and attach to an existing database
    ///
    /// # Errors
    ///
    /// * `Error::Config` if the configuration is incomplete
    /// * `Error::Connect` if the transport cannot be opened or the server
    ///   refuses the attach
    /// * `Error::Authentication` if the handshake fails
    /// * `Error::Transaction` if the default transaction cannot be begun
    pub async fn attach<C>(connector: &C, config: &SessionConfig) -> Result<Self>
    where
        C: Connector<Wire = P>,
    {
        Self::establish(connector, config, Mode::Attach).await
    }

    /// Connect, authenticate and create a new database
    ///
    /// Fails the same way as [`Session::attach`].
    pub async fn create<C>(connector: &C, config: &SessionConfig) -> Result<Self>
    where
        C: Connector<Wire = P>,
    {
        Self::establish(connector, config, Mode::Create).await
    }

    async fn establish<C>(connector: &C, config: &SessionConfig, mode: Mode) -> Result<Self>
    where
        C: Connector<Wire = P>,
    {
        config.validate()?;

        async {
            let start = Instant::now();
            let mut state = SessionState::Initial;

            let mut wire = match connector.connect(&config.address).await {
                Ok(wire) => wire,
                Err(e) => {
                    crate::metrics::counters::session_failed(mode.label(), labels::STAGE_TRANSPORT);
                    return Err(Error::Connect(format!(
                        "cannot open transport to {}: {}",
                        config.address, e
                    )));
                }
            };
            state.transition(SessionState::Connecting)?;

            let seed = ClientSeed::generate();
            let options = config.connect_options();
            let connect = ConnectRequest {
                database: &config.database,
                user: &config.user,
                password: &config.password,
                options: &options,
                seed: &seed,
            };

            let accepted = match handshake(&mut wire, &connect, config, &mut state).await {
                Ok(accepted) => accepted,
                Err(e) => {
                    return Err(abort(wire, mode, labels::STAGE_HANDSHAKE, e).await);
                }
            };
            tracing::debug!(
                protocol_version = accepted.protocol_version,
                plugin = %accepted.plugin,
                "handshake accepted"
            );

            let attach = AttachRequest {
                database: &config.database,
                user: &config.user,
                password: &config.password,
                role: config.role.as_deref(),
            };
            let database = match open_database(&mut wire, &attach, mode).await {
                Ok(handle) => handle,
                Err(e) => {
                    return Err(abort(wire, mode, labels::STAGE_ATTACH, e).await);
                }
            };
            tracing::debug!(%database, "database handle received");
            crate::metrics::histograms::handshake_duration(
                mode.label(),
                start.elapsed().as_millis() as u64,
            );

            let autocommit = config.autocommit;
            let isolation = config.isolation_level;
            let mut in_flight = None;
            let tpb = isolation.tpb(autocommit);
            let handle = match request_transaction(&mut wire, &tpb, &mut in_flight).await {
                Ok(handle) => handle,
                Err(e) => {
                    detach_quietly(&mut wire, database).await;
                    return Err(abort(wire, mode, labels::STAGE_DEFAULT_TRANSACTION, e).await);
                }
            };
            crate::metrics::counters::transaction_begun(isolation.as_str());

            let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
            let mut transactions = TransactionSet::new();
            let serial = transactions.insert(handle)?;
            state.transition(SessionState::Ready)?;

            crate::metrics::counters::session_opened(mode.label());
            tracing::info!(session_id = id, transaction = %handle, "session established");

            Ok(Self {
                wire: Arc::new(Mutex::new(wire)),
                id,
                database,
                accepted,
                seed,
                lower_column_names: config.column_name_to_lower,
                autocommit,
                isolation,
                current: Some(Transaction {
                    handle,
                    isolation,
                    autocommit,
                    session_id: id,
                    serial,
                }),
                transactions,
                state,
                time_zones: TimeZones::builtin(),
                in_flight: None,
            })
        }
        .instrument(tracing::info_span!(
            "establish",
            mode = mode.label(),
            user = %config.user,
            database = %config.database
        ))
        .await
    }

    /// Process-unique id of this session
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Server-assigned database handle
    pub fn database(&self) -> DatabaseHandle {
        self.database
    }

    /// Protocol version negotiated during the handshake
    pub fn protocol_version(&self) -> i32 {
        self.accepted.protocol_version
    }

    /// Authentication plugin chosen by the server
    pub fn auth_plugin(&self) -> &str {
        &self.accepted.plugin
    }

    /// Ephemeral key material used for this session's handshake
    pub fn client_seed(&self) -> &ClientSeed {
        &self.seed
    }

    /// Whether the session runs in autocommit mode
    pub fn is_autocommit(&self) -> bool {
        self.autocommit
    }

    /// Whether column names are reported in lower case
    pub fn lower_column_names(&self) -> bool {
        self.lower_column_names
    }

    /// Isolation level used for default transactions
    pub fn isolation_level(&self) -> IsolationLevel {
        self.isolation
    }

    /// Transaction used by the next prepare/exec/query, if any
    pub fn current_transaction(&self) -> Option<&Transaction> {
        self.current.as_ref()
    }

    /// Transactions begun and not yet resolved
    pub fn open_transactions(&self) -> &TransactionSet {
        &self.transactions
    }
}

impl<P: WireProtocol> std::fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("database", &self.database)
            .field("accepted", &self.accepted)
            .field("autocommit", &self.autocommit)
            .field("current", &self.current)
            .field("transactions", &self.transactions)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl<P: WireProtocol> Drop for Session<P> {
    fn drop(&mut self) {
        if self.state != SessionState::Closed {
            tracing::warn!(
                session_id = self.id,
                open_transactions = self.transactions.len(),
                "session dropped without close"
            );
        }
    }
}

/// Connect negotiation and accept
async fn handshake<P: WireProtocol>(
    wire: &mut P,
    request: &ConnectRequest<'_>,
    config: &SessionConfig,
    state: &mut SessionState,
) -> Result<Accepted> {
    wire.op_connect(request).await.map_err(handshake_error)?;
    state.transition(SessionState::Authenticating)?;

    let accepted = wire.op_accept(request).await.map_err(handshake_error)?;
    auth::check_plugin(&config.auth_plugins, &accepted.plugin)?;
    state.transition(SessionState::Attaching)?;
    Ok(accepted)
}

/// Attach or create, then read the database handle
async fn open_database<P: WireProtocol>(
    wire: &mut P,
    request: &AttachRequest<'_>,
    mode: Mode,
) -> Result<DatabaseHandle> {
    let sent = match mode {
        Mode::Attach => wire.op_attach(request).await,
        Mode::Create => wire.op_create(request).await,
    };
    sent.map_err(|e| attach_error(mode, request.database, e))?;
    let response = wire
        .op_response()
        .await
        .map_err(|e| attach_error(mode, request.database, e))?;
    Ok(DatabaseHandle(response.handle))
}

/// Best-effort detach after a failed construction
async fn detach_quietly<P: WireProtocol>(wire: &mut P, database: DatabaseHandle) {
    let result = match wire.op_detach(database).await {
        Ok(()) => wire.op_response().await.map(|_| ()),
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        tracing::warn!(%database, "detach after failed construction: {}", e);
    }
}

/// Release the transport of a half-built session and pass the error through
async fn abort<P: WireProtocol>(
    mut wire: P,
    mode: Mode,
    stage: &'static str,
    error: Error,
) -> Error {
    crate::metrics::counters::session_failed(mode.label(), stage);
    tracing::debug!(stage, "session establishment failed: {}", error);
    if let Err(e) = wire.close().await {
        tracing::warn!("failed to release transport: {}", e);
    }
    error
}

fn handshake_error(error: Error) -> Error {
    match error {
        Error::Authentication(_) => error,
        Error::Io(_) | Error::ConnectionClosed => {
            Error::Connect(format!("transport failed during handshake: {}", error))
        }
        other => Error::Authentication(other.to_string()),
    }
}

fn attach_error(mode: Mode, database: &str, error: Error) -> Error {
    match error {
        Error::Connect(_) => error,
        other => Error::Connect(format!("{} {} failed: {}", mode.label(), database, other)),
    }
}
