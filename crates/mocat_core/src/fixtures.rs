//! MO files for tests and benches, laid out the way `msgfmt` does: header,
//! original table, translation table, then NUL-terminated strings.

use crate::consts::MAGIC_LE;
use crate::layout::mo_path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn mo_bytes<K: AsRef<[u8]>, V: AsRef<[u8]>>(entries: &[(K, V)]) -> Vec<u8> {
    let n = entries.len() as u32;
    let orig_off = 28u32;
    let trans_off = orig_off + 8 * n;
    let mut data_off = trans_off + 8 * n;

    let mut tables = Vec::new();
    let mut strings = Vec::new();
    let originals = entries.iter().map(|(k, _)| k.as_ref());
    let translations = entries.iter().map(|(_, v)| v.as_ref());
    for s in originals.chain(translations) {
        tables.extend_from_slice(&(s.len() as u32).to_le_bytes());
        tables.extend_from_slice(&data_off.to_le_bytes());
        strings.extend_from_slice(s);
        strings.push(0);
        data_off += s.len() as u32 + 1;
    }

    let mut out = Vec::with_capacity(28 + tables.len() + strings.len());
    for w in [MAGIC_LE, 0, n, orig_off, trans_off, 0, trans_off + 8 * n] {
        out.extend_from_slice(&w.to_le_bytes());
    }
    out.extend_from_slice(&tables);
    out.extend_from_slice(&strings);
    out
}

/// Write `bytes` as `<base>/<locale>/LC_MESSAGES/<domain>.mo`.
pub fn write_mo(base: &Path, locale: &str, domain: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = mo_path(base, locale, domain);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, bytes)?;
    Ok(path)
}

pub fn spanish() -> Vec<u8> {
    mo_bytes(&[
        ("", "Content-Type: text/plain; charset=UTF-8\n"),
        ("File does exist", "El fichero existe"),
        ("File is too small\0Files are too small", "fichero pequeño\0ficheros pequeños"),
        ("Open", "Abrir"),
    ])
}
