//! Error types for container operations.

use serde_json::Value;
use thiserror::Error;

use sitekv_host::HostError;
use sitekv_types::{SiteId, TypeError};

/// Errors raised by container operations.
///
/// `NotFound` is the one variant callers are expected to branch on: it means
/// the looked-up key itself does not resolve. Every other variant is an
/// operation failure. `has` implementations convert exactly `NotFound` into
/// `Ok(false)` and surface everything else unchanged.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The looked-up key does not resolve in the container.
    ///
    /// `key` is always the exact key that was looked up.
    #[error("key {key:?} not found in {container}")]
    NotFound { container: String, key: String },

    /// The host served a site record whose shape cannot be interpreted.
    #[error("{container}: malformed site record for id {id}")]
    MalformedRecord {
        container: String,
        id: SiteId,
        #[source]
        source: TypeError,
    },

    /// A write was reported failed and the re-read value does not match the
    /// intended one.
    #[error("{container}: write of {key:?} did not take: intended {intended}, stored {stored}")]
    WriteMismatch {
        container: String,
        key: String,
        intended: Value,
        stored: Value,
    },

    /// The host delete reported that nothing was deleted.
    #[error("{container}: could not delete {key:?}")]
    DeleteFailed { container: String, key: String },

    /// The host itself failed mid-operation.
    #[error("{container}: host failure")]
    Host {
        container: String,
        #[source]
        source: HostError,
    },

    /// A factory's producer function failed.
    #[error("{message}")]
    Producer {
        container: String,
        message: String,
        #[source]
        source: Box<ContainerError>,
    },
}

impl ContainerError {
    /// `true` for the missing-key case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Label of the container that raised this error.
    pub fn container(&self) -> &str {
        match self {
            Self::NotFound { container, .. }
            | Self::MalformedRecord { container, .. }
            | Self::WriteMismatch { container, .. }
            | Self::DeleteFailed { container, .. }
            | Self::Host { container, .. }
            | Self::Producer { container, .. } => container,
        }
    }

    /// The key involved, when the failed operation was keyed.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NotFound { key, .. }
            | Self::WriteMismatch { key, .. }
            | Self::DeleteFailed { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Convenience type alias for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    #[test]
    fn not_found_carries_key_and_container() {
        let err = ContainerError::NotFound {
            container: "sites".into(),
            key: "5".into(),
        };

        assert!(err.is_not_found());
        assert_eq!(err.container(), "sites");
        assert_eq!(err.key(), Some("5"));
        assert_eq!(err.to_string(), "key \"5\" not found in sites");
        assert!(err.source().is_none());
    }

    #[test]
    fn producer_error_exposes_its_cause() {
        let cause = ContainerError::NotFound {
            container: "sites".into(),
            key: "7".into(),
        };
        let err = ContainerError::Producer {
            container: "site-options-factory".into(),
            message: "could not produce options container for site 7".into(),
            source: Box::new(cause),
        };

        assert!(!err.is_not_found());
        assert_eq!(err.container(), "site-options-factory");
        assert_eq!(
            err.to_string(),
            "could not produce options container for site 7"
        );

        let source = err.source().expect("cause should be chained");
        assert_eq!(source.to_string(), "key \"7\" not found in sites");
    }

    #[test]
    fn host_error_is_chained_as_source() {
        let err = ContainerError::Host {
            container: "site-options[1]".into(),
            source: HostError::Unavailable("down".into()),
        };

        let source = err.source().expect("host cause should be chained");
        assert_eq!(source.to_string(), "host unavailable: down");
    }

    #[test]
    fn write_mismatch_reports_both_values() {
        let err = ContainerError::WriteMismatch {
            container: "site-meta[2]".into(),
            key: "plan".into(),
            intended: json!("pro"),
            stored: json!("free"),
        };

        assert_eq!(err.key(), Some("plan"));
        let text = err.to_string();
        assert!(text.contains("\"pro\""), "intended value missing: {text}");
        assert!(text.contains("\"free\""), "stored value missing: {text}");
    }
}
