// crates/mocat_core/src/consts.rs

/// MO magic as written by a little-endian `msgfmt`.
pub const MAGIC_LE: u32 = 0x9504_12de;
/// MO magic as it decodes when the file was written big-endian.
pub const MAGIC_BE: u32 = 0xde12_0495;

/// Only revision 0 is understood.
pub const REVISION: i32 = 0;

/// magic, revision, N, orig_off, trans_off, hash_size, hash_off
pub const HDR_SIZE: usize = 28;

pub const MO_EXTENSION: &str = "mo";
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

pub const CACHE_MAGIC: &[u8; 4] = b"MOCC";
pub const CACHE_VERSION: u16 = 1;
pub const DEFAULT_CACHE_EXTENSION: &str = "moc";
