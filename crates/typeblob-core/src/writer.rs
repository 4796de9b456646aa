//! Fixed-capacity little-endian byte writer.
//!
//! The buffer is allocated once at its full capacity and never grows. Every
//! write checks the remaining space first and fails with
//! [`WriteError::BufferOverflow`] instead of reallocating, so the memory
//! footprint of a run is known up front.

use crate::ArchWidth;

/// Errors raised by [`ByteWriter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    #[error(
        "buffer overflow: need {needed} bytes but only {remaining} of {capacity} remain; increase the buffer capacity"
    )]
    BufferOverflow {
        needed: usize,
        remaining: usize,
        capacity: usize,
    },
}

/// Append-only byte buffer with a write cursor.
#[derive(Clone, Debug)]
pub struct ByteWriter {
    data: Vec<u8>,
    offset: usize,
    arch: ArchWidth,
}

impl ByteWriter {
    pub fn new(capacity: usize, arch: ArchWidth) -> Self {
        Self {
            data: vec![0; capacity],
            offset: 0,
            arch,
        }
    }

    #[inline]
    pub fn arch(&self) -> ArchWidth {
        self.arch
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current cursor, equal to the number of bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn ensure_capacity(&self, extra: usize) -> Result<(), WriteError> {
        if extra > self.remaining() {
            return Err(WriteError::BufferOverflow {
                needed: extra,
                remaining: self.remaining(),
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.ensure_capacity(bytes.len())?;
        let end = self.offset + bytes.len();
        self.data[self.offset..end].copy_from_slice(bytes);
        self.offset = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), WriteError> {
        self.put(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), WriteError> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), WriteError> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), WriteError> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), WriteError> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.write_u8(u8::from(value))
    }

    /// Write UTF-8 bytes followed by a single zero terminator.
    ///
    /// The capacity check covers the terminator too, so a string is either
    /// written whole or not at all.
    pub fn write_c_str(&mut self, s: &str) -> Result<(), WriteError> {
        self.ensure_capacity(s.len() + 1)?;
        self.put(s.as_bytes())?;
        self.write_u8(0)
    }

    /// Write an arch-width integer.
    ///
    /// 8-byte arch writes a signed `i64`; 4-byte arch writes an unsigned
    /// `u32`, so negative values wrap (e.g. `-1` becomes `0xFFFF_FFFF`).
    pub fn write_arch(&mut self, value: i64) -> Result<(), WriteError> {
        match self.arch {
            ArchWidth::Eight => self.write_i64(value),
            ArchWidth::Four => self.write_u32(value as u32),
        }
    }

    /// Overwrite an arch-width integer written earlier at `at`.
    ///
    /// The cursor is moved to `at`, the value written, and the cursor
    /// restored. `at` must point at a slot that was already written.
    pub fn patch_arch(&mut self, at: usize, value: i64) -> Result<(), WriteError> {
        let width = self.arch.bytes();
        if at + width > self.offset {
            return Err(WriteError::BufferOverflow {
                needed: width,
                remaining: self.offset.saturating_sub(at),
                capacity: self.capacity(),
            });
        }
        let resume = self.offset;
        self.offset = at;
        let result = self.write_arch(value);
        self.offset = resume;
        result
    }

    /// The written prefix of the buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.offset]
    }

    /// Consume the writer, keeping only the written bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.truncate(self.offset);
        self.data
    }
}
