use crate::consts::{MESSAGES_DIR, MO_EXTENSION};
use std::path::{Path, PathBuf};

/// `<base>/<locale>/LC_MESSAGES`
pub fn messages_dir(base: &Path, locale: &str) -> PathBuf {
    base.join(locale).join(MESSAGES_DIR)
}

/// `<base>/<locale>/LC_MESSAGES/<domain>.mo`
pub fn mo_path(base: &Path, locale: &str, domain: &str) -> PathBuf {
    messages_dir(base, locale).join(format!("{domain}.{MO_EXTENSION}"))
}

/// Sibling of the `.mo` file with the cache extension.
pub fn cache_path(base: &Path, locale: &str, domain: &str, extension: &str) -> PathBuf {
    messages_dir(base, locale).join(format!("{domain}.{extension}"))
}
