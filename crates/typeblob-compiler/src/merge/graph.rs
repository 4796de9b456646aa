//! The merged, id-assigned type table.

use indexmap::IndexMap;
use typeblob_core::{ArchWidth, Interner};
use typeblob_format::TypeId;

use super::MergeStats;
use crate::types::TypeRecord;

/// Result of a merge: every surviving record keyed by name, in id order,
/// plus the run's arch width and string volume.
#[derive(Debug)]
pub struct TypeGraph {
    pub(super) arch: ArchWidth,
    pub(super) strings: Interner,
    pub(super) types: IndexMap<String, TypeRecord>,
    pub(super) stats: MergeStats,
}

impl TypeGraph {
    #[inline]
    pub fn arch(&self) -> ArchWidth {
        self.arch
    }

    #[inline]
    pub fn strings(&self) -> &Interner {
        &self.strings
    }

    #[inline]
    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.types.get(name)
    }

    /// Records in id order (1, 2, ...).
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.values()
    }

    /// Id of the record named `name`, if it survived the merge.
    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        self.types.get(name).map(|record| record.id)
    }

    /// Absolute blob offset of an interned string; `0` if it was never seen.
    pub fn string_offset(&self, s: &str) -> i64 {
        self.strings.offset_of(s).map_or(0, |offset| offset as i64)
    }

    /// Pretty JSON object of every record keyed by name, in id order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.types)
    }
}
