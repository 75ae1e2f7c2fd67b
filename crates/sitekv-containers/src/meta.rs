//! Network-scoped metadata containers.
//!
//! Same contract as [`SiteOptions`](crate::SiteOptions), backed by the
//! host's network-wide metadata namespace instead of the per-site one.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use sitekv_host::{Scope, SiteHost};
use sitekv_types::SiteId;

use crate::error::{ContainerError, Result};
use crate::traits::{Container, MutableContainer};

/// Metadata for a particular site, stored network-wide.
///
/// Absence is detected against the sentinel `default` supplied at
/// construction, exactly as for per-site options.
#[derive(Debug)]
pub struct SiteMeta<H> {
    host: Arc<H>,
    site: SiteId,
    default: Value,
}

impl<H> SiteMeta<H> {
    /// Create a metadata container for `site`, with `default` as the
    /// absence sentinel.
    pub fn new(host: Arc<H>, site: SiteId, default: Value) -> Self {
        Self {
            host,
            site,
            default,
        }
    }

    /// The site this container is scoped to.
    pub fn site(&self) -> SiteId {
        self.site
    }

    /// The sentinel value marking absent keys.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    fn scope(&self) -> Scope {
        Scope::Network(self.site)
    }

    fn label(&self) -> String {
        format!("site-meta[{}]", self.site)
    }

    fn host_failure(&self, source: sitekv_host::HostError) -> ContainerError {
        ContainerError::Host {
            container: self.label(),
            source,
        }
    }
}

impl<H: SiteHost> Container<str> for SiteMeta<H> {
    type Value = Value;

    fn get(&self, key: &str) -> Result<Value> {
        let value = self
            .host
            .read_option(self.scope(), key, &self.default)
            .map_err(|e| self.host_failure(e))?;

        if value == self.default {
            return Err(ContainerError::NotFound {
                container: self.label(),
                key: key.to_string(),
            });
        }

        Ok(value)
    }

    fn has(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<H: SiteHost> MutableContainer<str> for SiteMeta<H> {
    fn set(&self, key: &str, value: Value) -> Result<()> {
        let written = self
            .host
            .write_option(self.scope(), key, &value)
            .map_err(|e| self.host_failure(e))?;
        if written {
            return Ok(());
        }

        // No-write report: disambiguate identical-value no-op from failure.
        let stored = self
            .host
            .read_option(self.scope(), key, &self.default)
            .map_err(|e| self.host_failure(e))?;
        if stored == value {
            debug!(site = %self.site, key, "meta write was an idempotent no-op");
            return Ok(());
        }

        Err(ContainerError::WriteMismatch {
            container: self.label(),
            key: key.to_string(),
            intended: value,
            stored,
        })
    }

    fn unset(&self, key: &str) -> Result<()> {
        let deleted = self
            .host
            .delete_option(self.scope(), key)
            .map_err(|e| self.host_failure(e))?;
        if deleted {
            Ok(())
        } else {
            Err(ContainerError::DeleteFailed {
                container: self.label(),
                key: key.to_string(),
            })
        }
    }
}
