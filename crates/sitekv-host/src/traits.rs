//! The [`SiteHost`] trait defining the host capability.
//!
//! Any backend (in-memory, a live multi-site installation, a fixture file)
//! implements this trait to back the container layer.

use serde_json::Value;
use sitekv_types::{SiteId, SiteRecord};

use crate::error::Result;
use crate::scope::Scope;

/// The injected host capability backing every container.
///
/// Implementations must be thread-safe (`Send + Sync`). Every operation is a
/// single synchronous call into the backing environment; the trait carries
/// no caching, batching, or transactional behavior.
pub trait SiteHost: Send + Sync {
    /// Look up a site record by id.
    ///
    /// Returns `Ok(None)` if the host knows no such site.
    fn site(&self, id: SiteId) -> Result<Option<SiteRecord>>;

    /// Read an option, falling back to `default` when the key is absent.
    ///
    /// The host has no dedicated "not found" signal here: an absent key and
    /// a stored value equal to `default` are indistinguishable to the
    /// caller.
    fn read_option(&self, scope: Scope, key: &str, default: &Value) -> Result<Value>;

    /// Write an option, creating or replacing it.
    ///
    /// Returns `Ok(false)` when the host performed no write. Hosts report
    /// this both on genuine failure and when the new value is identical to
    /// the stored one; a caller that needs to tell the two apart must
    /// re-read.
    fn write_option(&self, scope: Scope, key: &str, value: &Value) -> Result<bool>;

    /// Delete an option.
    ///
    /// Returns `Ok(false)` when the host deleted nothing, including deletes
    /// of keys that were never set.
    fn delete_option(&self, scope: Scope, key: &str) -> Result<bool>;
}
