//! Lookup surface: one [`Translator`] per (base directory, default domain, locale).
//!
//! Catalogs load lazily, once per (locale, domain), on first lookup. The map
//! lock is held only long enough to fetch the slot; the build itself runs
//! inside the slot's `OnceLock`, so concurrent first lookups of one domain
//! wait for a single build and other domains are not blocked.

use crate::builder::CatalogBuilder;
use crate::catalog::{Catalog, CatalogKey};
use crate::config::TranslatorConfig;
use crate::layout;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::debug;

/// The gettext lookup calls. Misses fall back to the input text.
pub trait Gettext {
    fn gettext(&self, msg: &str) -> String;
    fn dgettext(&self, domain: &str, msg: &str) -> String;
    fn ngettext(&self, msg: &str, msg_plural: &str, count: i64) -> String;
    fn dngettext(&self, domain: &str, msg: &str, msg_plural: &str, count: i64) -> String;
}

type Slot = Arc<OnceLock<Arc<Catalog>>>;

pub struct Translator {
    config: TranslatorConfig,
    builder: CatalogBuilder,
    slots: Mutex<HashMap<CatalogKey, Slot>>,
    builds: AtomicUsize,
}

impl Translator {
    pub fn new(base_dir: impl Into<PathBuf>, domain: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::with_config(TranslatorConfig::new(base_dir, domain, locale))
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        let builder = CatalogBuilder::new(config.cache.clone());
        Self { config, builder, slots: Mutex::new(HashMap::new()), builds: AtomicUsize::new(0) }
    }

    pub fn config(&self) -> &TranslatorConfig { &self.config }
    pub fn base_dir(&self) -> &Path { &self.config.base_dir }
    pub fn domain(&self) -> &str { &self.config.domain }
    pub fn locale(&self) -> &str { &self.config.locale }

    pub fn mo_path(&self, domain: &str) -> PathBuf {
        layout::mo_path(&self.config.base_dir, &self.config.locale, domain)
    }

    pub fn cache_path(&self, domain: &str) -> PathBuf {
        layout::cache_path(&self.config.base_dir, &self.config.locale, domain, &self.config.cache.extension)
    }

    /// Catalog for `domain` under this instance's locale, building it on first use.
    pub fn catalog(&self, domain: &str) -> Arc<Catalog> {
        let key = CatalogKey::new(self.config.locale.as_str(), domain);
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key).or_default())
        };
        let catalog = slot.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            let (mo, cache) = (self.mo_path(domain), self.cache_path(domain));
            let catalog = self.builder.build_or_load(&mo, &cache, &self.config.locale, domain);
            debug!(locale = %self.config.locale, domain, entries = catalog.len(), "catalog loaded");
            Arc::new(catalog)
        });
        Arc::clone(catalog)
    }

    /// Whether `domain` has been loaded. Loaded catalogs are never reloaded.
    pub fn is_loaded(&self, domain: &str) -> bool {
        let key = CatalogKey::new(self.config.locale.as_str(), domain);
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(&key).is_some_and(|slot| slot.get().is_some())
    }

    /// Catalog builds run so far, across all domains.
    pub fn build_count(&self) -> usize { self.builds.load(Ordering::Relaxed) }

    fn lookup(&self, domain: &str, msg: &str) -> String {
        match self.catalog(domain).singular(msg.as_bytes()) {
            Some(found) => String::from_utf8_lossy(found).into_owned(),
            None => msg.to_string(),
        }
    }

    fn lookup_plural(&self, domain: &str, msg: &str, msg_plural: &str, count: i64) -> String {
        match self.catalog(domain).plural(msg.as_bytes(), count) {
            Some(found) => String::from_utf8_lossy(found).into_owned(),
            None if count == 1 => msg.to_string(),
            None => msg_plural.to_string(),
        }
    }
}

impl Gettext for Translator {
    fn gettext(&self, msg: &str) -> String {
        self.lookup(&self.config.domain, msg)
    }

    fn dgettext(&self, domain: &str, msg: &str) -> String {
        self.lookup(domain, msg)
    }

    fn ngettext(&self, msg: &str, msg_plural: &str, count: i64) -> String {
        self.lookup_plural(&self.config.domain, msg, msg_plural, count)
    }

    fn dngettext(&self, domain: &str, msg: &str, msg_plural: &str, count: i64) -> String {
        self.lookup_plural(domain, msg, msg_plural, count)
    }
}
