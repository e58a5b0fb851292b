mod common;

use common::{mo_bytes, spanish, touch_ahead, write_mo};
use mocat_core::{cache, CatalogBuilder, Gettext, Translator};
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

#[test]
fn spanish_end_to_end() {
    let tmp = tempdir().unwrap();
    write_mo(tmp.path(), "es", "gettext", &spanish());
    let t = Translator::new(tmp.path(), "gettext", "es");

    assert_eq!(t.ngettext("File is too small", "Files are too small", 1), "fichero pequeño");
    assert_eq!(t.ngettext("File is too small", "Files are too small", 2), "ficheros pequeños");
    assert_eq!(t.gettext("File does not exist"), "File does not exist");
    assert_eq!(t.gettext("Open"), "Abrir");
}

#[test]
fn plural_selection_clamps_any_count() {
    let tmp = tempdir().unwrap();
    write_mo(
        tmp.path(),
        "pl",
        "app",
        &mo_bytes(&[("%d file\0%d files", "%d plik\0%d pliki\0%d plików")]),
    );
    let t = Translator::new(tmp.path(), "app", "pl");
    let expect = |count: i64| match count {
        1 => "%d plik",
        2 => "%d pliki",
        _ => "%d plików",
    };
    for count in [-10, -1, 0, 1, 2, 3, 4, 100, i64::MAX] {
        assert_eq!(t.ngettext("%d file", "%d files", count), expect(count), "count={count}");
    }
}

#[test]
fn plural_miss_uses_two_way_fallback() {
    let tmp = tempdir().unwrap();
    let t = Translator::new(tmp.path(), "nothing", "es");
    assert_eq!(t.ngettext("apple", "apples", 1), "apple");
    for count in [0, 2, -1, 42] {
        assert_eq!(t.ngettext("apple", "apples", count), "apples");
    }
}

#[test]
fn cache_round_trip_without_catalog_file() {
    let tmp = tempdir().unwrap();
    let mo = write_mo(tmp.path(), "es", "gettext", &spanish());
    let first = Translator::new(tmp.path(), "gettext", "es");
    let built = first.catalog("gettext");
    let cache_path = first.cache_path("gettext");
    assert!(cache_path.exists());
    assert_eq!(cache::load(&cache_path).unwrap(), *built);

    std::fs::remove_file(&mo).unwrap();
    let second = Translator::new(tmp.path(), "gettext", "es");
    assert_eq!(*second.catalog("gettext"), *built);
    assert_eq!(second.ngettext("File is too small", "Files are too small", 2), "ficheros pequeños");
}

#[test]
fn fresh_cache_is_preferred_over_catalog() {
    let tmp = tempdir().unwrap();
    let mo = write_mo(tmp.path(), "es", "gettext", &spanish());
    let t = Translator::new(tmp.path(), "gettext", "es");
    let cache_path = t.cache_path("gettext");

    // a cache with different content, newer than the catalog
    let alt = tmp.path().join("alt");
    write_mo(&alt, "es", "gettext", &mo_bytes(&[("Open", "Abierto")]));
    let alt_catalog = CatalogBuilder::parse(&common::mo_path(&alt, "es", "gettext")).unwrap().unwrap();
    cache::save(&alt_catalog, &cache_path).unwrap();
    touch_ahead(&cache_path, 60);
    assert!(cache::is_fresh(&mo, &cache_path));

    assert_eq!(t.gettext("Open"), "Abierto");
}

#[test]
fn stale_cache_is_rebuilt() {
    let tmp = tempdir().unwrap();
    write_mo(tmp.path(), "es", "gettext", &spanish());
    let first = Translator::new(tmp.path(), "gettext", "es");
    assert_eq!(first.gettext("Open"), "Abrir");

    let mo = write_mo(tmp.path(), "es", "gettext", &mo_bytes(&[("Open", "Abre")]));
    touch_ahead(&mo, 60);

    let second = Translator::new(tmp.path(), "gettext", "es");
    assert_eq!(second.gettext("Open"), "Abre");
    let rewritten = cache::load(&second.cache_path("gettext")).unwrap();
    assert_eq!(rewritten.singular(b"Open"), Some(&b"Abre"[..]));
}

#[test]
fn corrupt_cache_falls_back_to_catalog() {
    let tmp = tempdir().unwrap();
    write_mo(tmp.path(), "es", "gettext", &spanish());
    let t = Translator::new(tmp.path(), "gettext", "es");
    let cache_path = t.cache_path("gettext");
    std::fs::write(&cache_path, b"garbage that is long enough").unwrap();
    touch_ahead(&cache_path, 60);

    assert_eq!(t.gettext("Open"), "Abrir");
}

#[test]
fn malformed_catalogs_translate_nothing() {
    let tmp = tempdir().unwrap();
    let mut wrong_magic = spanish();
    wrong_magic[0..4].copy_from_slice(&0xdead_beefu32.to_le_bytes());
    let mut wrong_revision = spanish();
    wrong_revision[4..8].copy_from_slice(&2u32.to_le_bytes());
    let mut truncated = spanish();
    truncated[8..12].copy_from_slice(&100_000u32.to_le_bytes());

    let cases: [(&str, Vec<u8>); 4] = [
        ("short", vec![0xde, 0x12, 0x04, 0x95, 0, 0]),
        ("magic", wrong_magic),
        ("revision", wrong_revision),
        ("truncated", truncated),
    ];
    for (domain, bytes) in cases {
        write_mo(tmp.path(), "es", domain, &bytes);
        let t = Translator::new(tmp.path(), domain, "es");
        assert_eq!(t.gettext("Open"), "Open", "{domain}");
        assert_eq!(t.ngettext("File is too small", "Files are too small", 1), "File is too small");
        assert_eq!(t.ngettext("File is too small", "Files are too small", 3), "Files are too small");
        assert!(t.catalog(domain).is_empty(), "{domain}");
    }
}

#[test]
fn concurrent_first_use_builds_once() {
    let tmp = tempdir().unwrap();
    write_mo(tmp.path(), "es", "gettext", &spanish());
    let t = Arc::new(Translator::new(tmp.path(), "gettext", "es"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let t = Arc::clone(&t);
            thread::spawn(move || t.gettext("Open"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "Abrir");
    }
    assert_eq!(t.build_count(), 1);
}
