//! In-memory host for tests and ephemeral embedding.
//!
//! [`InMemoryHost`] keeps sites and options in `HashMap`s protected by
//! `RwLock`s. It implements the full [`SiteHost`] trait and reproduces the
//! signalling quirks of real host environments, so container behavior
//! exercised against it matches production.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use tracing::debug;

use sitekv_types::{SiteId, SiteRecord};

use crate::error::{HostError, Result};
use crate::scope::Scope;
use crate::traits::SiteHost;

/// An in-memory implementation of [`SiteHost`].
///
/// Faithful to real hosts in its signalling: a write of a value identical to
/// the stored one reports no write performed, and deleting an absent key
/// reports no delete. Data is lost when the host is dropped.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    sites: RwLock<HashMap<SiteId, SiteRecord>>,
    options: RwLock<HashMap<(Scope, String), Value>>,
}

impl InMemoryHost {
    /// Create a new empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a site under the given lookup id.
    ///
    /// The lookup id and the id inside the record may differ: real hosts
    /// normalize aliased ids this way, and the container layer is expected
    /// to honor the record's own id as canonical.
    pub fn insert_site(&self, id: SiteId, record: SiteRecord) {
        self.sites
            .write()
            .expect("lock poisoned")
            .insert(id, record);
    }

    /// Seed an option directly, bypassing write signalling.
    pub fn seed_option(&self, scope: Scope, key: &str, value: Value) {
        self.options
            .write()
            .expect("lock poisoned")
            .insert((scope, key.to_string()), value);
    }

    /// Number of options currently stored across all scopes.
    pub fn option_count(&self) -> usize {
        self.options.read().expect("lock poisoned").len()
    }
}

impl SiteHost for InMemoryHost {
    fn site(&self, id: SiteId) -> Result<Option<SiteRecord>> {
        let sites = self
            .sites
            .read()
            .map_err(|e| HostError::Backend(format!("lock poisoned: {e}")))?;
        Ok(sites.get(&id).cloned())
    }

    fn read_option(&self, scope: Scope, key: &str, default: &Value) -> Result<Value> {
        let options = self
            .options
            .read()
            .map_err(|e| HostError::Backend(format!("lock poisoned: {e}")))?;
        Ok(options
            .get(&(scope, key.to_string()))
            .cloned()
            .unwrap_or_else(|| default.clone()))
    }

    fn write_option(&self, scope: Scope, key: &str, value: &Value) -> Result<bool> {
        let mut options = self
            .options
            .write()
            .map_err(|e| HostError::Backend(format!("lock poisoned: {e}")))?;

        match options.entry((scope, key.to_string())) {
            Entry::Occupied(mut slot) => {
                // The identical-value quirk: no write happens and the host
                // reports it exactly like a failure.
                if slot.get() == value {
                    debug!(%scope, key, "identical write skipped");
                    return Ok(false);
                }
                slot.insert(value.clone());
                Ok(true)
            }
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                Ok(true)
            }
        }
    }

    fn delete_option(&self, scope: Scope, key: &str) -> Result<bool> {
        let mut options = self
            .options
            .write()
            .map_err(|e| HostError::Backend(format!("lock poisoned: {e}")))?;
        Ok(options.remove(&(scope, key.to_string())).is_some())
    }
}
