//! Site-keyed container factories.
//!
//! A factory is itself a container: keyed by site id, resolving to the
//! per-site option or meta container for that site. Resolution goes through
//! [`Sites`] first, so a missing site surfaces as the lookup's own
//! `NotFound` — distinct from a missing option inside the produced
//! container.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use sitekv_host::SiteHost;
use sitekv_types::text::{interpolate, NoTranslate, Translate};
use sitekv_types::SiteId;

use crate::error::{ContainerError, Result};
use crate::meta::SiteMeta;
use crate::options::SiteOptions;
use crate::sites::Sites;
use crate::traits::Container;

/// Producer invoked with the canonical site id.
type Producer<C> = dyn Fn(SiteId) -> Result<C> + Send + Sync;

/// Container of [`SiteOptions`] containers, keyed by site id.
pub struct SiteOptionsFactory<H> {
    sites: Sites<H>,
    produce: Box<Producer<SiteOptions<H>>>,
    translator: Arc<dyn Translate>,
}

impl<H: SiteHost + 'static> SiteOptionsFactory<H> {
    /// Container label used in diagnostics.
    const LABEL: &'static str = "site-options-factory";

    /// Build from a site lookup and an explicit producer.
    ///
    /// The producer receives the canonical site id — the id read from the
    /// looked-up record, which may differ from the id the caller passed in.
    pub fn new(
        sites: Sites<H>,
        produce: impl Fn(SiteId) -> Result<SiteOptions<H>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            sites,
            produce: Box::new(produce),
            translator: Arc::new(NoTranslate),
        }
    }

    /// Wire the default producer: every produced container shares `host`
    /// and uses `default` as its absence sentinel.
    pub fn with_default(host: Arc<H>, default: Value) -> Self {
        let sites = Sites::new(Arc::clone(&host));
        Self::new(sites, move |id| {
            Ok(SiteOptions::new(Arc::clone(&host), id, default.clone()))
        })
    }

    /// Replace the diagnostic translator.
    pub fn with_translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = translator;
        self
    }

    fn producer_failure(&self, id: SiteId, cause: ContainerError) -> ContainerError {
        let template = self
            .translator
            .translate("could not produce options container for site {0}");
        ContainerError::Producer {
            container: Self::LABEL.into(),
            message: interpolate(&template, &[&id]),
            source: Box::new(cause),
        }
    }
}

impl<H: SiteHost + 'static> Container<SiteId> for SiteOptionsFactory<H> {
    type Value = SiteOptions<H>;

    fn get(&self, id: &SiteId) -> Result<SiteOptions<H>> {
        // A NotFound from the site lookup passes through unchanged so
        // callers can tell "site missing" from "option missing".
        let record = self.sites.get(id)?;
        let canonical = record
            .site_id()
            .map_err(|e| ContainerError::MalformedRecord {
                container: Self::LABEL.into(),
                id: *id,
                source: e,
            })?;

        let produced =
            (self.produce)(canonical).map_err(|e| self.producer_failure(canonical, e))?;
        debug!(input = %id, canonical = %canonical, "produced site options container");
        Ok(produced)
    }

    fn has(&self, id: &SiteId) -> Result<bool> {
        // Site existence only; the producer is never invoked.
        self.sites.has(id)
    }
}

/// Container of [`SiteMeta`] containers, keyed by site id.
pub struct SiteMetaFactory<H> {
    sites: Sites<H>,
    produce: Box<Producer<SiteMeta<H>>>,
    translator: Arc<dyn Translate>,
}

impl<H: SiteHost + 'static> SiteMetaFactory<H> {
    /// Container label used in diagnostics.
    const LABEL: &'static str = "site-meta-factory";

    /// Build from a site lookup and an explicit producer.
    pub fn new(
        sites: Sites<H>,
        produce: impl Fn(SiteId) -> Result<SiteMeta<H>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            sites,
            produce: Box::new(produce),
            translator: Arc::new(NoTranslate),
        }
    }

    /// Wire the default producer: every produced container shares `host`
    /// and uses `default` as its absence sentinel.
    pub fn with_default(host: Arc<H>, default: Value) -> Self {
        let sites = Sites::new(Arc::clone(&host));
        Self::new(sites, move |id| {
            Ok(SiteMeta::new(Arc::clone(&host), id, default.clone()))
        })
    }

    /// Replace the diagnostic translator.
    pub fn with_translator(mut self, translator: Arc<dyn Translate>) -> Self {
        self.translator = translator;
        self
    }

    fn producer_failure(&self, id: SiteId, cause: ContainerError) -> ContainerError {
        let template = self
            .translator
            .translate("could not produce meta container for site {0}");
        ContainerError::Producer {
            container: Self::LABEL.into(),
            message: interpolate(&template, &[&id]),
            source: Box::new(cause),
        }
    }
}

impl<H: SiteHost + 'static> Container<SiteId> for SiteMetaFactory<H> {
    type Value = SiteMeta<H>;

    fn get(&self, id: &SiteId) -> Result<SiteMeta<H>> {
        let record = self.sites.get(id)?;
        let canonical = record
            .site_id()
            .map_err(|e| ContainerError::MalformedRecord {
                container: Self::LABEL.into(),
                id: *id,
                source: e,
            })?;

        let produced =
            (self.produce)(canonical).map_err(|e| self.producer_failure(canonical, e))?;
        debug!(input = %id, canonical = %canonical, "produced site meta container");
        Ok(produced)
    }

    fn has(&self, id: &SiteId) -> Result<bool> {
        self.sites.has(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitekv_host::{InMemoryHost, Scope};
    use sitekv_types::SiteRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SENTINEL: &str = "__missing__";

    fn seeded_host() -> Arc<InMemoryHost> {
        let host = Arc::new(InMemoryHost::new());
        host.insert_site(SiteId::new(5), SiteRecord::with_id(SiteId::new(5)));
        // Site registered under an alias: lookups by 7 resolve to canonical
        // id 3.
        host.insert_site(SiteId::new(7), SiteRecord::with_id(SiteId::new(3)));
        host
    }

    // ---- Test 1: Produced container is scoped to the canonical id ----
    #[test]
    fn get_normalizes_to_the_canonical_site_id() {
        let factory = SiteOptionsFactory::with_default(seeded_host(), json!(SENTINEL));

        let options = factory.get(&SiteId::new(7)).unwrap();
        assert_eq!(options.site(), SiteId::new(3));
    }

    // ---- Test 2: Produced container reads the right namespace ----
    #[test]
    fn produced_container_reads_its_sites_options() {
        let host = seeded_host();
        host.seed_option(Scope::Site(SiteId::new(5)), "theme", json!("dusk"));
        let factory = SiteOptionsFactory::with_default(Arc::clone(&host), json!(SENTINEL));

        let options = factory.get(&SiteId::new(5)).unwrap();
        assert_eq!(options.get("theme").unwrap(), json!("dusk"));
    }

    // ---- Test 3: Missing site propagates the lookup's NotFound ----
    #[test]
    fn get_of_unknown_site_passes_the_lookup_not_found_through() {
        let factory = SiteOptionsFactory::with_default(seeded_host(), json!(SENTINEL));

        let err = factory.get(&SiteId::new(99)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.container(), "sites");
        assert_eq!(err.key(), Some("99"));
    }

    // ---- Test 4: has checks site existence only ----
    #[test]
    fn has_never_invokes_the_producer() {
        let host = seeded_host();
        let produced = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&produced);
        let per_site_host = Arc::clone(&host);
        let factory = SiteOptionsFactory::new(Sites::new(host), move |id| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(SiteOptions::new(
                Arc::clone(&per_site_host),
                id,
                json!(SENTINEL),
            ))
        });

        assert!(factory.has(&SiteId::new(5)).unwrap());
        assert!(!factory.has(&SiteId::new(99)).unwrap());
        assert_eq!(produced.load(Ordering::SeqCst), 0);

        factory.get(&SiteId::new(5)).unwrap();
        assert_eq!(produced.load(Ordering::SeqCst), 1);
    }

    // ---- Test 5: Producer failures are wrapped with their cause ----
    #[test]
    fn producer_failure_is_wrapped() {
        let factory = SiteOptionsFactory::new(Sites::new(seeded_host()), |id| {
            Err(ContainerError::DeleteFailed {
                container: format!("site-options[{id}]"),
                key: "boot".into(),
            })
        });

        let err = factory.get(&SiteId::new(5)).unwrap_err();
        match &err {
            ContainerError::Producer {
                container, message, ..
            } => {
                assert_eq!(container, "site-options-factory");
                assert_eq!(message, "could not produce options container for site 5");
            }
            other => panic!("expected Producer, got: {other}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    // ---- Test 6: Translator is applied to producer-failure messages ----
    #[test]
    fn translator_rewrites_the_failure_message() {
        struct Bracketed;

        impl Translate for Bracketed {
            fn translate(&self, message: &str) -> String {
                format!("[{message}]")
            }
        }

        let factory = SiteOptionsFactory::new(Sites::new(seeded_host()), |id| {
            Err(ContainerError::DeleteFailed {
                container: format!("site-options[{id}]"),
                key: "boot".into(),
            })
        })
        .with_translator(Arc::new(Bracketed));

        let err = factory.get(&SiteId::new(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[could not produce options container for site 5]"
        );
    }

    // ---- Test 7: Malformed records fail before the producer runs ----
    #[test]
    fn malformed_record_is_a_container_error() {
        let host = Arc::new(InMemoryHost::new());
        host.insert_site(
            SiteId::new(4),
            SiteRecord::from_value(json!({ "domain": "a.test" })),
        );
        let factory = SiteOptionsFactory::with_default(host, json!(SENTINEL));

        let err = factory.get(&SiteId::new(4)).unwrap_err();
        assert!(matches!(err, ContainerError::MalformedRecord { .. }));
    }

    // ---- Test 8: The meta factory produces network-scoped containers ----
    #[test]
    fn meta_factory_produces_network_scoped_containers() {
        let host = seeded_host();
        host.seed_option(Scope::Network(SiteId::new(3)), "plan", json!("pro"));
        let factory = SiteMetaFactory::with_default(Arc::clone(&host), json!(SENTINEL));

        let meta = factory.get(&SiteId::new(7)).unwrap();
        assert_eq!(meta.site(), SiteId::new(3));
        assert_eq!(meta.get("plan").unwrap(), json!("pro"));
    }

    // ---- Test 9: Meta factory mirrors the lookup semantics ----
    #[test]
    fn meta_factory_lookup_semantics() {
        let factory = SiteMetaFactory::with_default(seeded_host(), json!(SENTINEL));

        assert!(factory.has(&SiteId::new(5)).unwrap());
        assert!(!factory.has(&SiteId::new(99)).unwrap());
        assert!(factory.get(&SiteId::new(99)).unwrap_err().is_not_found());
    }
}
