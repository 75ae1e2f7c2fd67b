//! Lookup of site records by id.

use std::sync::Arc;

use sitekv_host::SiteHost;
use sitekv_types::{SiteId, SiteRecord};

use crate::error::{ContainerError, Result};
use crate::traits::Container;

/// Container resolving site ids to the host's site records.
///
/// This is the root lookup every per-site container hangs off: the factories
/// confirm site existence here before producing option containers. Records
/// are handed back exactly as the host served them.
pub struct Sites<H> {
    host: Arc<H>,
}

impl<H> Sites<H> {
    /// Container label used in diagnostics.
    const LABEL: &'static str = "sites";

    /// Create a lookup container over `host`.
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }
}

impl<H> Clone for Sites<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<H: SiteHost> Container<SiteId> for Sites<H> {
    type Value = SiteRecord;

    fn get(&self, id: &SiteId) -> Result<SiteRecord> {
        let record = self
            .host
            .site(*id)
            .map_err(|e| ContainerError::Host {
                container: Self::LABEL.into(),
                source: e,
            })?
            .ok_or_else(|| ContainerError::NotFound {
                container: Self::LABEL.into(),
                key: id.to_string(),
            })?;

        // Reject records the rest of the system cannot interpret.
        record
            .site_id()
            .map_err(|e| ContainerError::MalformedRecord {
                container: Self::LABEL.into(),
                id: *id,
                source: e,
            })?;

        Ok(record)
    }

    fn has(&self, id: &SiteId) -> Result<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
