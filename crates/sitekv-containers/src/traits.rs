//! The container contracts.
//!
//! One read contract and one write extension, keyed generically so the site
//! lookup (keyed by [`SiteId`](sitekv_types::SiteId)) and the option
//! containers (keyed by `str`) share the same shape.

use crate::error::Result;

/// Read access to a keyed container.
pub trait Container<K: ?Sized> {
    /// The value this container resolves keys to.
    type Value;

    /// Resolve `key` to its value.
    ///
    /// Fails with [`ContainerError::NotFound`](crate::ContainerError::NotFound)
    /// when the key does not resolve, and with another
    /// [`ContainerError`](crate::ContainerError) variant on any operation
    /// failure.
    fn get(&self, key: &K) -> Result<Self::Value>;

    /// Whether `key` resolves.
    ///
    /// `false` exactly when `get` would report `NotFound`. Operation
    /// failures are surfaced, never silently mapped to `false`.
    fn has(&self, key: &K) -> Result<bool>;
}

/// Write access to a keyed container.
pub trait MutableContainer<K: ?Sized>: Container<K> {
    /// Store `value` under `key`, creating or replacing it.
    fn set(&self, key: &K, value: Self::Value) -> Result<()>;

    /// Remove `key` from the container.
    fn unset(&self, key: &K) -> Result<()>;
}
