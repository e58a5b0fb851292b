use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::SystemTime;

pub fn crc32(data: &[u8]) -> u32 { crc32fast::hash(data) }

pub fn write_u32<W: Write>(w: &mut W, v: u32) -> io::Result<()> { w.write_u32::<LE>(v) }
pub fn write_u16<W: Write>(w: &mut W, v: u16) -> io::Result<()> { w.write_u16::<LE>(v) }
pub fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> { r.read_u32::<LE>() }
pub fn read_u16<R: Read>(r: &mut R) -> io::Result<u16> { r.read_u16::<LE>() }
pub fn read_i32<R: Read>(r: &mut R) -> io::Result<i32> { r.read_i32::<LE>() }

/// Length-prefixed byte string: [u32 len][bytes].
pub fn write_bytes<W: Write>(w: &mut W, data: &[u8]) -> io::Result<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "string longer than u32"))?;
    write_u32(w, len)?;
    w.write_all(data)
}

/// Modification time, or `None` if the file is missing or the platform has no mtime.
pub fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Split on NUL. Always yields at least one (possibly empty) part.
pub fn split_nul(raw: &[u8]) -> Vec<Vec<u8>> {
    raw.split(|b| *b == 0).map(<[u8]>::to_vec).collect()
}
