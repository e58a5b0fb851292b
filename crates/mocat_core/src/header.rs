//! MO header (LE, 28 bytes):
//!   magic[4]      = 0x950412de (or 0xde120495)
//!   revision[4]   = 0
//!   num_strings[4]
//!   orig_off[4]   = original-string table
//!   trans_off[4]  = translation table
//!   hash_size[4]  (not read)
//!   hash_off[4]   (not read)
//!
//! All fields decode as signed 32-bit. Values are not checked against the
//! file size here; see [`MoHeader::min_file_size`].

use crate::consts::{MAGIC_BE, MAGIC_LE, REVISION};
use crate::errors::Result;
use crate::reader::BinaryReader;
use std::io::{Read, Seek};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
    pub magic: i32,
    pub num_strings: i32,
    pub orig_table_offset: i32,
    pub trans_table_offset: i32,
    pub hash_table_size: i32,
    pub hash_table_offset: i32,
}

#[inline]
fn is_magic(word: i32) -> bool {
    word == MAGIC_LE as i32 || word == MAGIC_BE as i32
}

impl MoHeader {
    /// Parse from the reader's current position (normally 0).
    ///
    /// `Ok(None)` means the magic or revision did not match; the file is
    /// simply not a catalog we understand.
    pub fn parse<R: Read + Seek>(r: &mut BinaryReader<R>) -> Result<Option<Self>> {
        let magic = r.read_i32()?;
        let revision = r.read_i32()?;
        if !is_magic(magic) || revision != REVISION {
            return Ok(None);
        }
        Ok(Some(Self {
            magic,
            num_strings: r.read_i32()?,
            orig_table_offset: r.read_i32()?,
            trans_table_offset: r.read_i32()?,
            hash_table_size: r.read_i32()?,
            hash_table_offset: r.read_i32()?,
        }))
    }

    /// Smallest file that can hold this header's tables: 4×(N+7).
    pub fn min_file_size(&self) -> i64 {
        4 * (i64::from(self.num_strings) + 7)
    }

    /// Number of strings, with negative counts read as zero.
    pub fn string_count(&self) -> usize {
        usize::try_from(self.num_strings).unwrap_or(0)
    }

    pub fn fits(&self, file_size: u64) -> bool {
        i128::from(file_size) >= i128::from(self.min_file_size())
    }
}
