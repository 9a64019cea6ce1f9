//! Error types shared between the dashboard server and client.
//!
//! `DashboardError` has one domain kind, `InvalidArgument`, raised synchronously by the
//! series, moving-average, ticker and prediction operations. The remaining variants wrap
//! the plumbing around them (sockets, JSON framing, channels) so that both binaries
//! can propagate a single error type with `?`.
use std::io;

use thiserror::Error;

/// Unified error type shared by server and client.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A caller supplied a value the operation cannot work with
    /// (zero moving-average window, empty series, unknown ticker symbol, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or unexpected message on the command protocol.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl DashboardError {
    /// Shorthand for building an [`DashboardError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        DashboardError::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_io() -> Result<(), DashboardError> {
        Err(io::Error::other("socket closed"))?;
        Ok(())
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        let err = failing_io().unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: socket closed");
    }

    #[test]
    fn invalid_argument_names_its_kind() {
        let err = DashboardError::invalid("empty symbol");
        assert_eq!(err.to_string(), "Invalid argument: empty symbol");
    }
}
