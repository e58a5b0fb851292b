//! Offset tables and the strings they point at.
//!
//! Table layout: N × { length[4], offset[4] }, both LE signed. The original
//! table and the translation table are index-aligned.

use crate::errors::Result;
use crate::reader::BinaryReader;
use std::io::{Read, Seek};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetEntry {
    pub length: i32,
    pub offset: i32,
}

/// Read `count` entries starting at `offset`, in file order.
///
/// A negative `count` reads nothing. Fails if the seek is rejected or the
/// table runs past the end of the file.
pub fn parse_offset_table<R: Read + Seek>(
    r: &mut BinaryReader<R>,
    offset: i32,
    count: i32,
) -> Result<Vec<OffsetEntry>> {
    r.seek(i64::from(offset))?;
    let n = usize::try_from(count).unwrap_or(0);
    let mut table = Vec::with_capacity(n.min(1 << 16));
    for _ in 0..n {
        let length = r.read_i32()?;
        let offset = r.read_i32()?;
        table.push(OffsetEntry { length, offset });
    }
    Ok(table)
}

/// Raw bytes of one entry. Zero (or negative) length reads nothing.
pub fn read_entry<R: Read + Seek>(r: &mut BinaryReader<R>, entry: OffsetEntry) -> Result<Vec<u8>> {
    r.seek(i64::from(entry.offset))?;
    match usize::try_from(entry.length) {
        Ok(len) if len > 0 => r.read(len),
        _ => Ok(Vec::new()),
    }
}
