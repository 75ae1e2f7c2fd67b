//! Per-site option containers.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use sitekv_host::{Scope, SiteHost};
use sitekv_types::SiteId;

use crate::error::{ContainerError, Result};
use crate::traits::{Container, MutableContainer};

/// Options of one site, keyed by option name.
///
/// The host's option-read API has no "not found" signal; absence is detected
/// by comparing the returned value against the sentinel `default` chosen at
/// construction time. A real stored value equal to the sentinel is
/// indistinguishable from absence — pick one unlikely to collide with real
/// data.
///
/// The container holds no state beyond its construction parameters; every
/// operation re-queries the host.
#[derive(Debug)]
pub struct SiteOptions<H> {
    host: Arc<H>,
    site: SiteId,
    default: Value,
}

impl<H> SiteOptions<H> {
    /// Create an option container for `site`, with `default` as the
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
        Scope::Site(self.site)
    }

    fn label(&self) -> String {
        format!("site-options[{}]", self.site)
    }

    fn host_failure(&self, source: sitekv_host::HostError) -> ContainerError {
        ContainerError::Host {
            container: self.label(),
            source,
        }
    }
}

impl<H: SiteHost> Container<str> for SiteOptions<H> {
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

impl<H: SiteHost> MutableContainer<str> for SiteOptions<H> {
    fn set(&self, key: &str, value: Value) -> Result<()> {
        let written = self
            .host
            .write_option(self.scope(), key, &value)
            .map_err(|e| self.host_failure(e))?;
        if written {
            return Ok(());
        }

        // The host reports no-write both on failure and when the new value
        // is identical to the stored one. Re-read to tell the two apart.
        let stored = self
            .host
            .read_option(self.scope(), key, &self.default)
            .map_err(|e| self.host_failure(e))?;
        if stored == value {
            debug!(site = %self.site, key, "write was an idempotent no-op");
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
