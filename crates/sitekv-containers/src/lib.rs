//! Container adapters over a multi-site host environment.
//!
//! This crate turns a host's flat option/meta/site APIs into a uniform
//! container interface: `get`/`has` for reads and existence, `set`/`unset`
//! for writes, with typed errors that separate "the key does not resolve"
//! from "the operation failed".
//!
//! # Architecture
//!
//! - [`Sites`] resolves site ids to the host's site records. It is the root
//!   lookup every per-site container hangs off.
//! - [`SiteOptions`] and [`SiteMeta`] expose one site's options and one
//!   network's metadata as flat containers keyed by option name. The host's
//!   read API has no "not found" signal, so absence is detected by
//!   comparing against a caller-chosen sentinel default.
//! - [`SiteOptionsFactory`] and [`SiteMetaFactory`] are site-keyed
//!   containers of containers: they confirm the site exists, normalize its
//!   id, and produce the per-site container for it.
//! - Host failures never escape raw: every public operation wraps them in
//!   [`ContainerError`], except that a `NotFound` raised by a nested site
//!   lookup propagates unchanged so callers can tell "site missing" from
//!   "option missing".
//!
//! # Modules
//!
//! - [`error`] — [`ContainerError`] and the crate `Result` alias
//! - [`traits`] — The [`Container`] / [`MutableContainer`] contracts
//! - [`sites`] — The [`Sites`] lookup container
//! - [`options`] — Per-site [`SiteOptions`]
//! - [`meta`] — Network-scoped [`SiteMeta`]
//! - [`factory`] — The site-keyed container factories

pub mod error;
pub mod factory;
pub mod meta;
pub mod options;
pub mod sites;
pub mod traits;

pub use error::{ContainerError, Result};
pub use factory::{SiteMetaFactory, SiteOptionsFactory};
pub use meta::SiteMeta;
pub use options::SiteOptions;
pub use sites::Sites;
pub use traits::{Container, MutableContainer};

// Re-export the types callers need to wire containers.
pub use sitekv_host::{InMemoryHost, Scope, SiteHost};
pub use sitekv_types::{SiteId, SiteRecord};
