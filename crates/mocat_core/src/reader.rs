//! Random-access byte reader over a catalog file.

use crate::errors::{MoError, Result};
use crate::utils::read_i32;
use std::fs;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

pub struct BinaryReader<R> {
    inner: R,
}

impl BinaryReader<Cursor<Vec<u8>>> {
    /// Load the whole file; catalogs are read by many small seeks.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Cursor::new(fs::read(path)?)))
    }

    /// Size of the loaded file.
    pub fn len(&self) -> u64 { self.inner.get_ref().len() as u64 }
}

impl<R: Read + Seek> BinaryReader<R> {
    pub fn new(inner: R) -> Self { Self { inner } }

    /// Next `n` bytes; fewer if the file ends first.
    pub fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(n.min(64 * 1024));
        (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Absolute seek from the start of the file.
    pub fn seek(&mut self, offset: i64) -> Result<()> {
        let pos = u64::try_from(offset).map_err(|_| MoError::BadSeek(offset))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// One little-endian signed 32-bit word.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(read_i32(&mut self.inner)?)
    }
}
