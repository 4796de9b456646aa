//! Blob header: two arch-width absolute offsets.

use typeblob_core::{ArchWidth, ByteWriter, WriteError};

use crate::DecodeError;
use crate::decode::read_arch;

/// First `2 × arch` bytes of the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Absolute offset of the string volume (always the header size).
    pub strings_offset: u64,
    /// Absolute offset of the type table.
    pub table_offset: u64,
}

impl Header {
    /// Header for a blob whose string volume is `volume_len` bytes long.
    pub fn for_volume(arch: ArchWidth, volume_len: usize) -> Self {
        let header_size = arch.header_size() as u64;
        Self {
            strings_offset: header_size,
            table_offset: header_size + volume_len as u64,
        }
    }

    /// Encode into a writer sized exactly for the header.
    pub fn to_bytes(&self, arch: ArchWidth) -> Result<Vec<u8>, WriteError> {
        let mut w = ByteWriter::new(arch.header_size(), arch);
        w.write_arch(self.strings_offset as i64)?;
        w.write_arch(self.table_offset as i64)?;
        Ok(w.into_bytes())
    }

    pub fn from_bytes(bytes: &[u8], arch: ArchWidth) -> Result<Self, DecodeError> {
        let width = arch.bytes();
        let strings_offset = read_arch(bytes, 0, arch)? as u64;
        let table_offset = read_arch(bytes, width, arch)? as u64;

        let header = Self {
            strings_offset,
            table_offset,
        };
        if strings_offset != arch.header_size() as u64
            || table_offset < strings_offset
            || table_offset > bytes.len() as u64
        {
            return Err(DecodeError::BadHeader {
                strings_offset,
                table_offset,
            });
        }
        Ok(header)
    }

    /// Length of the string volume described by this header.
    pub fn volume_len(&self) -> usize {
        (self.table_offset - self.strings_offset) as usize
    }
}
