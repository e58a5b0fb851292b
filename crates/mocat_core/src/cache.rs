//! Cache artifact (LE):
//!   magic[4]   = "MOCC"
//!   version[2] = 1
//!   rsv[2]     = 0
//!   count[4]
//!   count × { key: [u32 len][bytes], forms[4], forms × [u32 len][bytes] }
//!   crc32[4]   over everything before it
//!
//! Keys are written sorted so the same catalog always produces the same file.

use crate::catalog::Catalog;
use crate::consts::{CACHE_MAGIC, CACHE_VERSION};
use crate::errors::{MoError, Result};
use crate::utils::{crc32, mtime, read_u16, read_u32, write_bytes, write_u16, write_u32};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

const PREAMBLE: usize = 4 + 2 + 2 + 4;

pub fn encode(catalog: &Catalog) -> io::Result<Vec<u8>> {
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut buf = Vec::with_capacity(PREAMBLE + entries.len() * 32);
    buf.extend_from_slice(CACHE_MAGIC);
    write_u16(&mut buf, CACHE_VERSION)?;
    write_u16(&mut buf, 0)?;
    write_u32(&mut buf, entries.len() as u32)?;
    for (key, forms) in entries {
        write_bytes(&mut buf, key)?;
        write_u32(&mut buf, forms.len() as u32)?;
        for form in forms {
            write_bytes(&mut buf, form)?;
        }
    }
    let sum = crc32(&buf);
    write_u32(&mut buf, sum)?;
    Ok(buf)
}

fn take_chunk<'a>(cur: &mut &'a [u8]) -> Result<&'a [u8]> {
    let len = read_u32(cur).map_err(|_| MoError::CacheCorrupt("missing length"))? as usize;
    if len > cur.len() {
        return Err(MoError::CacheCorrupt("length past end"));
    }
    let (head, tail) = cur.split_at(len);
    *cur = tail;
    Ok(head)
}

pub fn decode(data: &[u8]) -> Result<Catalog> {
    if data.len() < PREAMBLE + 4 {
        return Err(MoError::CacheCorrupt("too short"));
    }
    let (body, tail) = data.split_at(data.len() - 4);
    let want = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
    if &body[0..4] != CACHE_MAGIC {
        return Err(MoError::CacheCorrupt("bad magic"));
    }
    if crc32(body) != want {
        return Err(MoError::CacheCorrupt("checksum mismatch"));
    }

    let mut cur = &body[4..];
    let version = read_u16(&mut cur)?;
    if version != CACHE_VERSION {
        return Err(MoError::CacheVersion(version));
    }
    let _rsv = read_u16(&mut cur)?;
    let count = read_u32(&mut cur)?;

    let mut catalog = Catalog::new();
    for _ in 0..count {
        let key = take_chunk(&mut cur)?.to_vec();
        let nforms = read_u32(&mut cur).map_err(|_| MoError::CacheCorrupt("missing form count"))? as usize;
        // each form needs at least its length word
        if nforms == 0 || nforms > cur.len() / 4 {
            return Err(MoError::CacheCorrupt("bad form count"));
        }
        let mut forms = Vec::with_capacity(nforms);
        for _ in 0..nforms {
            forms.push(take_chunk(&mut cur)?.to_vec());
        }
        catalog.insert(key, forms);
    }
    if !cur.is_empty() {
        return Err(MoError::CacheCorrupt("trailing bytes"));
    }
    Ok(catalog)
}

pub fn load(path: &Path) -> Result<Catalog> {
    let data = fs::read(path)?;
    decode(&data)
}

/// Write to a sibling temp file, then rename over `path`.
pub fn save(catalog: &Catalog, path: &Path) -> Result<()> {
    let bytes = encode(catalog)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = tempfile::Builder::new().prefix(".mocat_").tempfile_in(dir)?;
    tmp.as_file_mut().write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    debug!(path = %path.display(), entries = catalog.len(), "cache written");
    Ok(())
}

/// The artifact is usable iff it can be opened and is not older than the
/// catalog file. With no catalog file at all, any readable artifact counts.
pub fn is_fresh(mo_path: &Path, cache_path: &Path) -> bool {
    if File::open(cache_path).is_err() {
        return false;
    }
    let Some(cache_time) = mtime(cache_path) else { return false };
    match mtime(mo_path) {
        Some(mo_time) => cache_time >= mo_time,
        None => !mo_path.exists(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn sample() -> Catalog {
        let mut c = Catalog::new();
        c.insert_raw(b"apple\0apples", b"manzana\0manzanas");
        c.insert_raw(b"", b"Content-Type: text/plain; charset=UTF-8\n");
        c.insert_raw(b"raw", &[0xff, 0xfe]);
        c
    }

    #[test]
    fn encode_is_deterministic_and_decodes() {
        let c = sample();
        let a = encode(&c).unwrap();
        assert_eq!(a, encode(&c.clone()).unwrap());
        assert_eq!(decode(&a).unwrap(), c);
    }

    #[test]
    fn rejects_damage() {
        let good = encode(&sample()).unwrap();

        let mut flipped = good.clone();
        flipped[PREAMBLE + 2] ^= 0x40;
        assert!(matches!(decode(&flipped), Err(MoError::CacheCorrupt("checksum mismatch"))));

        assert!(matches!(decode(&good[..good.len() - 1]), Err(MoError::CacheCorrupt(_))));
        assert!(matches!(decode(b"MOCC"), Err(MoError::CacheCorrupt("too short"))));

        let mut other = good.clone();
        other[0] = b'X';
        assert!(matches!(decode(&other), Err(MoError::CacheCorrupt("bad magic"))));
    }

    #[test]
    fn rejects_future_version() {
        let mut data = encode(&Catalog::new()).unwrap();
        data.truncate(data.len() - 4);
        data[4] = 9;
        let sum = crc32(&data);
        data.extend_from_slice(&sum.to_le_bytes());
        assert!(matches!(decode(&data), Err(MoError::CacheVersion(9))));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("messages.moc");
        save(&sample(), &path).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
        // overwrite in place
        save(&Catalog::new(), &path).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn freshness_follows_mtimes() {
        let tmp = tempdir().unwrap();
        let mo = tmp.path().join("d.mo");
        let cache = tmp.path().join("d.moc");
        assert!(!is_fresh(&mo, &cache));

        save(&Catalog::new(), &cache).unwrap();
        assert!(is_fresh(&mo, &cache), "no catalog file: cache alone is enough");

        fs::write(&mo, b"x").unwrap();
        let base = SystemTime::now();
        File::options().write(true).open(&mo).unwrap().set_modified(base).unwrap();
        File::options().write(true).open(&cache).unwrap().set_modified(base).unwrap();
        assert!(is_fresh(&mo, &cache), "equal mtimes are fresh");

        File::options()
            .write(true)
            .open(&mo)
            .unwrap()
            .set_modified(base + Duration::from_secs(10))
            .unwrap();
        assert!(!is_fresh(&mo, &cache));
    }
}
