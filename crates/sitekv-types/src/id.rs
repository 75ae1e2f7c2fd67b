//! Site identity.
//!
//! A [`SiteId`] names one site in a multi-site host environment. Hosts hand
//! ids around both as integers and as numeric strings, so the type parses
//! from either form but is always an integer internally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Numeric identity of one site in a multi-site host.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SiteId(u64);

impl SiteId {
    /// Create a site id from its numeric form.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric form of this id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<u32> for SiteId {
    fn from(id: u32) -> Self {
        Self(u64::from(id))
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SiteId {
    type Err = TypeError;

    /// Parse a numeric-string site id (e.g. `"5"`).
    ///
    /// Surrounding ASCII whitespace is tolerated; anything that is not a
    /// non-negative integer is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidSiteId(s.to_string()))
    }
}
