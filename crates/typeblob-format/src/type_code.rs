/// One-byte discriminant written after each type id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeCode {
    Base = 1,
    Struct = 2,
    Union = 3,
    Enum = 4,
}

impl TypeCode {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Base),
            2 => Some(Self::Struct),
            3 => Some(Self::Union),
            4 => Some(Self::Enum),
            _ => None,
        }
    }

    /// Struct and union entries carry a field list.
    pub fn has_fields(self) -> bool {
        matches!(self, Self::Struct | Self::Union)
    }

    /// Keyword used by descriptor files and dumps.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
        }
    }
}
