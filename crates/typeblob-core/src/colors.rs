//! ANSI color codes for the blob dump.

/// Palette keyed by what is being printed rather than by hue, so the dump
/// code reads `c.name` instead of `c.green`.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Section headers and type kinds.
    pub kind: &'static str,
    /// Type, field and enumerator names.
    pub name: &'static str,
    /// Offsets, sizes, ids.
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        kind: "\x1b[34m",
        name: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        kind: "",
        name: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
