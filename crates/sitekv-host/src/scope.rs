//! The namespace selector for option storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use sitekv_types::SiteId;

/// The namespace an option lives in.
///
/// Hosts keep two flat key/value namespaces: one per site, and one for the
/// network as a whole. The two never alias, even under the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Options of a single site.
    Site(SiteId),

    /// Network-wide metadata, keyed by the network's id.
    Network(SiteId),
}

impl Scope {
    /// The id this scope is keyed by.
    pub const fn id(self) -> SiteId {
        match self {
            Self::Site(id) | Self::Network(id) => id,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Site(id) => write!(f, "site/{id}"),
            Self::Network(id) => write!(f, "network/{id}"),
        }
    }
}
