use std::fmt;

use serde::Serialize;

/// Stable identifier of a merged type.
///
/// Ids are assigned once, sequentially from 1, after every descriptor file
/// has been merged. `0` is reserved for references that did not resolve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Sentinel written for a type reference that names no known type.
    pub const UNRESOLVED: Self = Self(0);

    /// The id at position `index` (0-based) of the merged table.
    #[inline]
    pub fn from_position(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_resolved(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
