//! Error types

use std::io;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the session layer and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// Handshake failed: no acceptable protocol/plugin, or credentials rejected
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Transport could not be opened, or the server refused attach/create
    #[error("connect failed: {0}")]
    Connect(String),

    /// Begin, commit or rollback failed, or no usable transaction exists
    #[error("transaction error: {0}")]
    Transaction(String),

    /// Prepare or execute failed
    #[error("statement error: {0}")]
    Statement(String),

    /// One or more cleanup steps failed while closing the session.
    ///
    /// Every cleanup step ran; the errors are kept in the order they occurred.
    #[error("session teardown failed ({} error(s)): {}", .0.len(), join(.0))]
    Teardown(Vec<Error>),

    /// Error reported by the server in a response packet
    #[error("server error: {0}")]
    Server(String),

    /// Malformed or unexpected protocol exchange
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Operation not valid in the current session state
    #[error("invalid state: expected {expected}, got {actual}")]
    InvalidState {
        /// Expected state description
        expected: String,
        /// Actual state description
        actual: String,
    },

    /// Transport was released or closed by the peer
    #[error("connection closed")]
    ConnectionClosed,

    /// Transport I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the error came from the transport rather than the server
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Io(_) | Error::ConnectionClosed)
    }

    /// Errors retained by a failed teardown (empty for other kinds)
    pub fn teardown_errors(&self) -> &[Error] {
        match self {
            Error::Teardown(errors) => errors,
            _ => &[],
        }
    }
}

fn join(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_display_lists_every_error() {
        let err = Error::Teardown(vec![
            Error::Server("rollback refused".into()),
            Error::ConnectionClosed,
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 error(s)"));
        assert!(msg.contains("rollback refused"));
        assert!(msg.contains("connection closed"));
        assert_eq!(err.teardown_errors().len(), 2);
    }

    #[test]
    fn test_io_conversion_is_transport() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(err.is_transport());
        assert!(!Error::Server("x".into()).is_transport());
    }

    #[test]
    fn test_teardown_errors_empty_for_other_kinds() {
        assert!(Error::Statement("bad".into()).teardown_errors().is_empty());
    }
}
