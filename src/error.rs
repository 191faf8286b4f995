//! Error handling

use std::time::Duration;

use thiserror::Error;

/// Failure to obtain a verdict from the classification service
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Server error: HTTP {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Client setup failed: {0}")]
    Setup(String),
}

/// Failure of a call into the browser
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The browser ran the call and reported an error (e.g. unknown tab id)
    #[error("Browser rejected {method}: {message}")]
    Rejected { method: String, message: String },

    #[error("No reply to {method} within {after:?}")]
    Timeout { method: String, after: Duration },

    #[error("Browser disconnected: {0}")]
    Disconnected(String),

    /// The reply arrived but did not have the expected shape
    #[error("Unexpected reply to {method}: {detail}")]
    Protocol { method: String, detail: String },
}

/// Failure on the native messaging channel
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Message of {len} bytes exceeds the {limit} byte limit")]
    MessageTooLarge { len: usize, limit: usize },

    #[error("Stream ended inside a message ({got} of {expected} bytes)")]
    Truncated { expected: usize, got: usize },
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
pub type HostResult<T> = Result<T, HostError>;
pub type BridgeResult<T> = Result<T, BridgeError>;
