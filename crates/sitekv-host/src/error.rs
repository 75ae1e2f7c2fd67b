//! Error types for host operations.

use thiserror::Error;

/// Errors from the host environment itself.
///
/// These cover transport and backend failures only. An absent site or option
/// is never a host error: lookups signal absence through their return value
/// and the container layer decides what that means.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host backend failed (poisoned lock, backend fault, ...).
    #[error("host backend failure: {0}")]
    Backend(String),

    /// The host is unreachable or refused the call.
    #[error("host unavailable: {0}")]
    Unavailable(String),

    /// I/O error from a file-backed host.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
