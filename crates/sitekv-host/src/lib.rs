//! The host capability backing sitekv containers.
//!
//! Containers never call into a host environment directly; they go through
//! the [`SiteHost`] trait, so the adapter layer can be exercised against an
//! in-memory backend and embedders can plug in whatever environment actually
//! stores their sites and options.
//!
//! # Architecture
//!
//! - A host keeps a registry of **sites** and two flat key/value option
//!   namespaces per installation, selected by [`Scope`]: one per site and
//!   one for the network as a whole.
//! - Option reads have no dedicated "not found" signal; they fall back to a
//!   caller-supplied default. Writes and deletes report whether the host
//!   actually performed them, with the quirk that a write of an identical
//!   value is reported the same way as a failed write.
//! - [`HostError`] covers transport and backend failures only. Absence is
//!   never a host error.
//!
//! # Modules
//!
//! - [`error`] — [`HostError`] and the crate `Result` alias
//! - [`scope`] — The [`Scope`] namespace selector
//! - [`traits`] — The [`SiteHost`] trait defining the capability
//! - [`memory`] — In-memory [`InMemoryHost`] for tests and embedding

pub mod error;
pub mod memory;
pub mod scope;
pub mod traits;

pub use error::{HostError, Result};
pub use memory::InMemoryHost;
pub use scope::Scope;
pub use traits::SiteHost;
