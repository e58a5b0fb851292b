//! In-memory translation mapping for one (locale, domain).
//!
//! Keys and forms are raw catalog bytes; nothing is re-encoded.

use crate::utils::split_nul;
use std::collections::HashMap;

/// Identifies one loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey {
    pub locale: String,
    pub domain: String,
}

impl CatalogKey {
    pub fn new(locale: impl Into<String>, domain: impl Into<String>) -> Self {
        Self { locale: locale.into(), domain: domain.into() }
    }
}

/// Source form → ordered plural forms (index 0 is the singular).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<Vec<u8>, Vec<Vec<u8>>>,
}

impl Catalog {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, form: Vec<u8>, translations: Vec<Vec<u8>>) {
        self.entries.insert(form, translations);
    }

    /// Add one pair of raw table entries. Every NUL-separated source form
    /// maps to the same list of translations; a later entry with the same
    /// form replaces an earlier one.
    pub fn insert_raw(&mut self, original: &[u8], translation: &[u8]) {
        let translations = split_nul(translation);
        for form in split_nul(original) {
            self.entries.insert(form, translations.clone());
        }
    }

    pub fn forms(&self, msg: &[u8]) -> Option<&[Vec<u8>]> {
        self.entries.get(msg).map(Vec::as_slice)
    }

    pub fn singular(&self, msg: &[u8]) -> Option<&[u8]> {
        self.forms(msg)?.first().map(Vec::as_slice)
    }

    /// Form number `count` (1-based). Counts outside `1..=len` select the
    /// last form.
    pub fn plural(&self, msg: &[u8], count: i64) -> Option<&[u8]> {
        let forms = self.forms(msg)?;
        let n = forms.len();
        let pick = match usize::try_from(count) {
            Ok(c) if (1..=n).contains(&c) => c,
            _ => n,
        };
        forms.get(pick.checked_sub(1)?).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[Vec<u8>])> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}
