//! Session teardown

use super::core::Session;
use super::state::SessionState;
use crate::metrics::labels;
use crate::protocol::WireProtocol;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

impl<P: WireProtocol> Session<P> {
    /// Close the session
    ///
    /// Reads any response left unread by an abandoned operation, then rolls
    /// back every open transaction in begin order, detaches from the
    /// database and releases the transport. A failing step does not stop the
    /// following ones, and the transport is released in every case.
    ///
    /// # Errors
    ///
    /// `Error::Teardown` with every failure, in the order the steps ran.
    /// Cursors still holding the transport fail on their next read.
    pub async fn close(mut self) -> Result<()> {
        let span = tracing::info_span!("close", session_id = self.id, database = %self.database);
        async move {
            let start = Instant::now();
            self.state.transition(SessionState::Closing)?;
            self.settle().await;

            let mut errors = Vec::new();
            let handles = self.transactions.drain();
            self.current = None;

            let wire = Arc::clone(&self.wire);
            let mut wire = wire.lock().await;

            for handle in handles {
                let result = match wire.op_rollback(handle).await {
                    Ok(()) => wire.op_response().await.map(|_| ()),
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::warn!(transaction = %handle, "rollback during close failed: {}", e);
                    crate::metrics::counters::teardown_error(labels::STEP_ROLLBACK);
                    errors.push(Error::Transaction(format!(
                        "rollback of {} failed: {}",
                        handle, e
                    )));
                }
            }

            let detached = match wire.op_detach(self.database).await {
                Ok(()) => wire.op_response().await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = detached {
                tracing::warn!("detach during close failed: {}", e);
                crate::metrics::counters::teardown_error(labels::STEP_DETACH);
                errors.push(e);
            }

            if let Err(e) = wire.close().await {
                tracing::warn!("transport release failed: {}", e);
                crate::metrics::counters::teardown_error(labels::STEP_RELEASE);
                errors.push(e);
            }
            drop(wire);

            self.state.transition(SessionState::Closed)?;
            crate::metrics::histograms::teardown_duration(start.elapsed().as_millis() as u64);
            crate::metrics::counters::session_closed(errors.is_empty());

            if errors.is_empty() {
                tracing::info!("session closed");
                Ok(())
            } else {
                Err(Error::Teardown(errors))
            }
        }
        .instrument(span)
        .await
    }
}
