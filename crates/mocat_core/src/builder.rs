//! Turns a `.mo` file (or its cache artifact) into a [`Catalog`].
//!
//! Every stage reports problems through `Result`/`Option`; [`CatalogBuilder::build_or_load`]
//! is where they stop. A missing, short, or malformed catalog becomes an empty
//! catalog, and a damaged cache becomes a rebuild. Callers never see an error.

use crate::cache;
use crate::catalog::Catalog;
use crate::config::CacheConfig;
use crate::consts::HDR_SIZE;
use crate::errors::{MoError, Result};
use crate::header::MoHeader;
use crate::reader::BinaryReader;
use crate::table::{parse_offset_table, read_entry};
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    cache: CacheConfig,
}

impl CatalogBuilder {
    pub fn new(cache: CacheConfig) -> Self { Self { cache } }

    /// Reuse a fresh cache artifact, otherwise rebuild from the catalog file
    /// and rewrite the artifact.
    pub fn build_or_load(&self, mo_path: &Path, cache_path: &Path, locale: &str, domain: &str) -> Catalog {
        if self.cache.enabled && cache::is_fresh(mo_path, cache_path) {
            match cache::load(cache_path) {
                Ok(catalog) => {
                    debug!(locale, domain, entries = catalog.len(), "loaded from cache");
                    return catalog;
                }
                Err(e) => warn!(locale, domain, error = %e, path = %cache_path.display(), "cache unusable, rebuilding"),
            }
        }

        match Self::parse(mo_path) {
            Ok(Some(catalog)) => {
                debug!(locale, domain, entries = catalog.len(), "parsed catalog");
                if self.cache.enabled {
                    if let Err(e) = cache::save(&catalog, cache_path) {
                        warn!(locale, domain, error = %e, path = %cache_path.display(), "cache not written");
                    }
                }
                catalog
            }
            Ok(None) => {
                debug!(locale, domain, path = %mo_path.display(), "no catalog file");
                Catalog::new()
            }
            Err(e) => {
                warn!(locale, domain, error = %e, path = %mo_path.display(), "catalog rejected");
                Catalog::new()
            }
        }
    }

    /// Parse and rewrite the cache regardless of its state. With the cache
    /// disabled this only parses.
    pub fn refresh_cache(&self, mo_path: &Path, cache_path: &Path) -> Result<Catalog> {
        let catalog = Self::parse(mo_path)?.ok_or_else(|| MoError::Missing(mo_path.to_path_buf()))?;
        if self.cache.enabled {
            cache::save(&catalog, cache_path)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog file without touching any cache.
    ///
    /// `Ok(None)` when the file is absent or too short to hold a header.
    pub fn parse(mo_path: &Path) -> Result<Option<Catalog>> {
        let size = match fs::metadata(mo_path) {
            Ok(m) if m.is_file() => m.len(),
            _ => return Ok(None),
        };
        if size < HDR_SIZE as u64 {
            return Ok(None);
        }

        // one read; every table and string below is a seek into memory
        let mut r = BinaryReader::open(mo_path)?;
        let size = r.len();
        let header = MoHeader::parse(&mut r)?.ok_or(MoError::BadHeader)?;
        if !header.fits(size) {
            return Err(MoError::Truncated { size, required: header.min_file_size() });
        }
        trace!(?header, "header");

        let trans_table = parse_offset_table(&mut r, header.trans_table_offset, header.num_strings)?;
        let mut translations = Vec::with_capacity(trans_table.len());
        for entry in trans_table {
            translations.push(read_entry(&mut r, entry).unwrap_or_default());
        }

        // a broken original table leaves the catalog empty but still valid
        let orig_table = parse_offset_table(&mut r, header.orig_table_offset, header.num_strings)
            .unwrap_or_else(|e| {
                warn!(error = %e, path = %mo_path.display(), "original table unreadable");
                Vec::new()
            });

        let mut catalog = Catalog::new();
        for (idx, entry) in orig_table.into_iter().enumerate() {
            let original = read_entry(&mut r, entry).unwrap_or_default();
            let translation = translations.get(idx).map(Vec::as_slice).unwrap_or_default();
            catalog.insert_raw(&original, translation);
        }
        Ok(Some(catalog))
    }
}
