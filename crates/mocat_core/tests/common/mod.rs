#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub use mocat_core::fixtures::{mo_bytes, spanish};
pub use mocat_core::layout::mo_path;

pub fn write_mo(base: &Path, locale: &str, domain: &str, bytes: &[u8]) -> PathBuf {
    mocat_core::fixtures::write_mo(base, locale, domain, bytes).unwrap()
}

/// Push a file's mtime `secs` seconds into the future.
pub fn touch_ahead(path: &Path, secs: u64) {
    let when = SystemTime::now() + Duration::from_secs(secs);
    File::options().write(true).open(path).unwrap().set_modified(when).unwrap();
}
