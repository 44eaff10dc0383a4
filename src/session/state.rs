//! Session state machine

use crate::{Error, Result};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not connected
    Initial,

    /// Transport open, connect negotiation sent
    Connecting,

    /// Accept/key exchange in progress
    Authenticating,

    /// Attach or create sent, awaiting the database handle
    Attaching,

    /// Authenticated and attached
    Ready,

    /// Teardown in progress
    Closing,

    /// Closed
    Closed,
}

impl SessionState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        use SessionState::*;

        matches!(
            (self, next),
            (Initial, Connecting)
                | (Connecting, Authenticating)
                | (Authenticating, Attaching)
                | (Attaching, Ready)
                | (Ready, Closing)
                | (Closing, Closed)
                | (_, Closed)
        )
    }

    /// Transition to new state
    pub fn transition(&mut self, next: SessionState) -> Result<()> {
        if !self.can_transition_to(next) {
            return Err(Error::InvalidState {
                expected: format!("valid transition from {:?}", self),
                actual: format!("{:?}", next),
            });
        }
        *self = next;
        Ok(())
    }

    /// Fail unless the session accepts statements and transactions
    pub fn ensure_ready(&self) -> Result<()> {
        if *self == SessionState::Ready {
            return Ok(());
        }
        Err(Error::InvalidState {
            expected: SessionState::Ready.to_string(),
            actual: self.to_string(),
        })
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Connecting => write!(f, "connecting"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::Attaching => write!(f, "attaching"),
            Self::Ready => write!(f, "ready"),
            Self::Closing => write!(f, "closing"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
