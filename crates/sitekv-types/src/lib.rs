//! Foundation types for sitekv.
//!
//! This crate provides the identity and record types shared by every other
//! sitekv crate, along with the message-interpolation utilities used when
//! composing diagnostics.
//!
//! # Key Types
//!
//! - [`SiteId`] — Numeric identity of one site in a multi-site host
//! - [`SiteRecord`] — Opaque site record served by the host environment
//! - [`TypeError`] — Errors from identity parsing and record access
//! - [`Translate`] — Pluggable translation capability, with [`NoTranslate`]
//!   as the pass-through default

pub mod error;
pub mod id;
pub mod record;
pub mod text;

pub use error::TypeError;
pub use id::SiteId;
pub use record::SiteRecord;
pub use text::{interpolate, NoTranslate, Translate};
