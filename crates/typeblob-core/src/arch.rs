//! Architecture width of the produced blob.
//!
//! Every size, offset, id and string reference in the output is written with
//! the same width. The width is taken from the first `arch` directive seen in
//! any descriptor file and never changes afterwards.

/// Byte width of arch-sized integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum ArchWidth {
    /// 32-bit targets: arch integers are `u32`.
    Four = 4,
    /// 64-bit targets: arch integers are `i64`.
    #[default]
    Eight = 8,
}

impl ArchWidth {
    /// Convert from a descriptor `arch` value. Only 4 and 8 are meaningful.
    pub fn from_bytes(value: i64) -> Option<Self> {
        match value {
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    #[inline]
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Size of the blob header: two arch-width offsets.
    #[inline]
    pub fn header_size(self) -> usize {
        self.bytes() * 2
    }
}

/// Write-once holder for the run's arch width.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArchContext {
    width: Option<ArchWidth>,
}

impl ArchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the width if it is still unset.
    ///
    /// Returns `false` when a width was already fixed; the earlier one stays.
    pub fn fix(&mut self, width: ArchWidth) -> bool {
        if self.width.is_some() {
            return false;
        }
        self.width = Some(width);
        true
    }

    /// The fixed width, or `None` if no directive has been seen yet.
    #[inline]
    pub fn get(&self) -> Option<ArchWidth> {
        self.width
    }

    /// Return the fixed width, fixing the default first if nothing was set.
    pub fn resolve(&mut self) -> ArchWidth {
        *self.width.get_or_insert_with(ArchWidth::default)
    }
}
