//! String interning into the blob's string volume.
//!
//! Every name, type name, alias and enumerator name is stored exactly once.
//! Instead of an index, each string is identified by its absolute byte offset
//! in the final blob: the volume sits right after the header, so the offset
//! is the volume cursor plus the header size (two arch-width integers).
//! Offsets are handed out while parsing, long before the blob is assembled.

use indexmap::IndexMap;

use crate::{ArchWidth, ByteWriter, WriteError};

/// Deduplicating string volume.
///
/// Iteration follows first-seen order, which is also the byte order of the
/// volume. A string that is already present is never written again.
#[derive(Debug, Clone)]
pub struct Interner {
    /// String to absolute blob offset.
    offsets: IndexMap<String, u64>,
    /// Null-terminated UTF-8 strings, back to back.
    volume: ByteWriter,
}

impl Interner {
    pub fn new(arch: ArchWidth, capacity: usize) -> Self {
        Self {
            offsets: IndexMap::new(),
            volume: ByteWriter::new(capacity, arch),
        }
    }

    #[inline]
    pub fn arch(&self) -> ArchWidth {
        self.volume.arch()
    }

    /// Intern a string, returning its absolute offset in the blob.
    pub fn intern(&mut self, s: &str) -> Result<u64, WriteError> {
        if let Some(&offset) = self.offsets.get(s) {
            return Ok(offset);
        }

        let offset = (self.volume.position() + self.arch().header_size()) as u64;
        self.volume.write_c_str(s)?;
        self.offsets.insert(s.to_owned(), offset);
        Ok(offset)
    }

    /// Offset of a string interned earlier.
    #[inline]
    pub fn offset_of(&self, s: &str) -> Option<u64> {
        self.offsets.get(s).copied()
    }

    /// Raw volume bytes, exactly as they appear in the blob.
    #[inline]
    pub fn volume(&self) -> &[u8] {
        self.volume.as_bytes()
    }

    /// Number of distinct strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over `(string, offset)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.offsets.iter().map(|(s, &offset)| (s.as_str(), offset))
    }
}
