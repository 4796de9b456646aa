//! Binary layout of the typeblob reflection table.
//!
//! ```text
//! [header: strings_offset, table_offset]        2 x arch
//! [string volume: N null-terminated UTF-8]
//! [type table: count, then one entry per type]
//! ```
//!
//! Type entry: `id (arch) | code (u8) | name (arch) | size (arch)`, followed
//! for struct/union by `count (arch)` and per field
//! `name (arch) | const (u8) | pointer_depth (u32) | offset (arch) |
//! array_size (arch) | type_id (arch)`, and for enum by `count (arch)` and per
//! enumerator `name (arch) | value (arch)`.
//!
//! All integers are little-endian. Every string reference is an absolute
//! byte offset into the blob, so the table contains no pointers.

#![allow(clippy::len_without_is_empty)]

mod decode;
mod dump;
mod header;
mod ids;
mod type_code;


pub use decode::{Blob, DecodeError, DecodedEnumerator, DecodedField, DecodedMembers, DecodedType};
pub use dump::dump;
pub use header::Header;
pub use ids::TypeId;
pub use type_code::TypeCode;

/// Global symbol marking the first byte of the blob in the assembly mirror.
pub const START_SYMBOL: &str = "_reflection_dat_start";
/// Global symbol marking one past the last byte of the blob.
pub const END_SYMBOL: &str = "_reflection_dat_end";

/// Bytes per `.byte` directive line in the assembly mirror.
pub const ASM_BYTES_PER_LINE: usize = 12;
