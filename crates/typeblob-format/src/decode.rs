//! Decoder for produced blobs.
//!
//! Used to inspect and verify producer output (dumps, round-trip checks).
//! It is deliberately strict: any truncation, unknown type code, or string
//! reference that does not land on a volume entry is an error.

use typeblob_core::ArchWidth;

use crate::{Header, TypeCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("blob truncated: need {needed} bytes at offset {at}")]
    Truncated { at: usize, needed: usize },

    #[error("bad header: strings at {strings_offset}, table at {table_offset}")]
    BadHeader {
        strings_offset: u64,
        table_offset: u64,
    },

    #[error("invalid type code {code} at offset {at}")]
    InvalidTypeCode { code: u8, at: usize },

    #[error("no string starts at offset {0}")]
    InvalidString(u64),

    #[error("{0} trailing bytes after the type table")]
    TrailingBytes(usize),
}

/// Struct/union field as stored in the blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField {
    pub name_offset: u64,
    pub name: String,
    pub is_const: bool,
    pub pointer_depth: u32,
    pub offset: i64,
    pub array_size: i64,
    pub type_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedEnumerator {
    pub name_offset: u64,
    pub name: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedMembers {
    None,
    Fields(Vec<DecodedField>),
    Enumerators(Vec<DecodedEnumerator>),
}

impl DecodedMembers {
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Fields(fields) => fields.len(),
            Self::Enumerators(enumerators) => enumerators.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedType {
    pub id: u64,
    pub code: TypeCode,
    pub name_offset: u64,
    pub name: String,
    pub size: i64,
    pub members: DecodedMembers,
}

/// A fully decoded blob.
#[derive(Clone, Debug)]
pub struct Blob<'a> {
    bytes: &'a [u8],
    arch: ArchWidth,
    header: Header,
    types: Vec<DecodedType>,
}

impl<'a> Blob<'a> {
    pub fn decode(bytes: &'a [u8], arch: ArchWidth) -> Result<Self, DecodeError> {
        let header = Header::from_bytes(bytes, arch)?;
        let mut blob = Self {
            bytes,
            arch,
            header,
            types: Vec::new(),
        };

        let mut cursor = Cursor {
            bytes,
            pos: header.table_offset as usize,
            arch,
        };
        let count = cursor.arch()? as u64;
        for _ in 0..count {
            let ty = blob.decode_type(&mut cursor)?;
            blob.types.push(ty);
        }

        if cursor.pos != bytes.len() {
            return Err(DecodeError::TrailingBytes(bytes.len() - cursor.pos));
        }
        Ok(blob)
    }

    fn decode_type(&self, cursor: &mut Cursor<'a>) -> Result<DecodedType, DecodeError> {
        let id = cursor.arch()? as u64;
        let code_at = cursor.pos;
        let code_byte = cursor.u8()?;
        let code = TypeCode::from_u8(code_byte).ok_or(DecodeError::InvalidTypeCode {
            code: code_byte,
            at: code_at,
        })?;
        let name_offset = cursor.arch()? as u64;
        let name = self.string_at(name_offset)?.to_owned();
        let size = cursor.arch()?;

        let members = match code {
            TypeCode::Base => DecodedMembers::None,
            TypeCode::Struct | TypeCode::Union => {
                let count = cursor.arch()? as u64;
                let mut fields = Vec::new();
                for _ in 0..count {
                    let name_offset = cursor.arch()? as u64;
                    fields.push(DecodedField {
                        name_offset,
                        name: self.string_at(name_offset)?.to_owned(),
                        is_const: cursor.u8()? != 0,
                        pointer_depth: cursor.u32()?,
                        offset: cursor.arch()?,
                        array_size: cursor.arch()?,
                        type_id: cursor.arch()? as u64,
                    });
                }
                DecodedMembers::Fields(fields)
            }
            TypeCode::Enum => {
                let count = cursor.arch()? as u64;
                let mut enumerators = Vec::new();
                for _ in 0..count {
                    let name_offset = cursor.arch()? as u64;
                    enumerators.push(DecodedEnumerator {
                        name_offset,
                        name: self.string_at(name_offset)?.to_owned(),
                        value: cursor.arch()?,
                    });
                }
                DecodedMembers::Enumerators(enumerators)
            }
        };

        Ok(DecodedType {
            id,
            code,
            name_offset,
            name,
            size,
            members,
        })
    }

    #[inline]
    pub fn arch(&self) -> ArchWidth {
        self.arch
    }

    #[inline]
    pub fn header(&self) -> Header {
        self.header
    }

    #[inline]
    pub fn types(&self) -> &[DecodedType] {
        &self.types
    }

    /// Look up a type by its id.
    pub fn type_by_id(&self, id: u64) -> Option<&DecodedType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Raw string volume bytes.
    pub fn volume(&self) -> &'a [u8] {
        let start = self.header.strings_offset as usize;
        &self.bytes[start..self.header.table_offset as usize]
    }

    /// Iterate `(offset, string)` over the volume in storage order.
    pub fn strings(&self) -> impl Iterator<Item = (u64, &'a str)> {
        let base = self.header.strings_offset;
        let volume = self.volume();
        let mut pos = 0usize;
        std::iter::from_fn(move || {
            if pos >= volume.len() {
                return None;
            }
            let len = volume[pos..].iter().position(|&b| b == 0)?;
            let s = std::str::from_utf8(&volume[pos..pos + len]).ok()?;
            let offset = base + pos as u64;
            pos += len + 1;
            Some((offset, s))
        })
    }

    /// Resolve an absolute string offset.
    pub fn string_at(&self, offset: u64) -> Result<&'a str, DecodeError> {
        let header = self.header;
        if offset < header.strings_offset || offset >= header.table_offset {
            return Err(DecodeError::InvalidString(offset));
        }
        let volume = self.volume();
        let start = (offset - header.strings_offset) as usize;
        let len = volume[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::InvalidString(offset))?;
        std::str::from_utf8(&volume[start..start + len]).map_err(|_| DecodeError::InvalidString(offset))
    }
}

/// Read one arch-width integer at `at`.
///
/// 4-byte values are zero-extended, mirroring how they were written.
pub(crate) fn read_arch(bytes: &[u8], at: usize, arch: ArchWidth) -> Result<i64, DecodeError> {
    let width = arch.bytes();
    let slice = bytes.get(at..at + width).ok_or(DecodeError::Truncated { at, needed: width })?;
    Ok(match arch {
        ArchWidth::Eight => i64::from_le_bytes(slice.try_into().unwrap_or([0; 8])),
        ArchWidth::Four => u32::from_le_bytes(slice.try_into().unwrap_or([0; 4])) as i64,
    })
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    arch: ArchWidth,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let slice = self.bytes.get(self.pos..self.pos + n).ok_or(DecodeError::Truncated {
            at: self.pos,
            needed: n,
        })?;
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn arch(&mut self) -> Result<i64, DecodeError> {
        let value = read_arch(self.bytes, self.pos, self.arch)?;
        self.pos += self.arch.bytes();
        Ok(value)
    }
}
