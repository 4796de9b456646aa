//! Merged type records.

use serde::Serialize;
use typeblob_format::{TypeCode, TypeId};

/// One reflected type, as declared by the last descriptor file that named it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeRecord {
    pub name: String,
    pub id: TypeId,
    /// Byte size; 0 when the descriptor gave none (e.g. function pointer
    /// placeholders such as `void (*)(int)`).
    pub size: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(flatten)]
    pub body: TypeBody,
}

/// Kind-specific payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeBody {
    Base,
    Struct { fields: Vec<FieldDescriptor> },
    Union { fields: Vec<FieldDescriptor> },
    Enum { enumerators: Vec<EnumeratorDescriptor> },
}

/// A struct or union member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Name of the referenced type; resolved only at emission time.
    #[serde(rename = "type")]
    pub type_name: String,
    pub offset: i64,
    pub pointer_depth: u32,
    /// 0 for scalars, element count for fixed-length arrays.
    pub array_size: i64,
    pub is_const: bool,
    /// The field names a struct, union or enum rather than a base type.
    /// Such a field is dropped from the blob if its type never resolves.
    pub is_struct_like: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnumeratorDescriptor {
    pub name: String,
    pub value: i64,
}

impl TypeBody {
    pub fn code(&self) -> TypeCode {
        match self {
            Self::Base => TypeCode::Base,
            Self::Struct { .. } => TypeCode::Struct,
            Self::Union { .. } => TypeCode::Union,
            Self::Enum { .. } => TypeCode::Enum,
        }
    }

    /// Empty payload for a freshly started block of the given kind.
    pub fn empty(code: TypeCode) -> Self {
        match code {
            TypeCode::Base => Self::Base,
            TypeCode::Struct => Self::Struct { fields: Vec::new() },
            TypeCode::Union => Self::Union { fields: Vec::new() },
            TypeCode::Enum => Self::Enum {
                enumerators: Vec::new(),
            },
        }
    }

    /// Number of declared members (before any unresolved field is dropped).
    pub fn member_count(&self) -> usize {
        match self {
            Self::Base => 0,
            Self::Struct { fields } | Self::Union { fields } => fields.len(),
            Self::Enum { enumerators } => enumerators.len(),
        }
    }
}

impl TypeRecord {
    #[inline]
    pub fn code(&self) -> TypeCode {
        self.body.code()
    }
}
