//! Run-wide state shared by every descriptor file.

use typeblob_core::{ArchContext, ArchWidth, Interner, WriteError};

/// Arch width and string volume for one run.
///
/// The interner is created lazily: string offsets depend on the header size,
/// so the arch width must be fixed before the first string is interned. If a
/// string shows up before any `arch` directive, the default width is fixed
/// at that moment.
#[derive(Debug)]
pub struct Context {
    arch: ArchContext,
    strings: Option<Interner>,
    capacity: usize,
}

impl Context {
    /// `capacity` bounds the string volume in bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            arch: ArchContext::new(),
            strings: None,
            capacity,
        }
    }

    /// Apply an `arch` directive. Returns `false` if a width was already fixed.
    pub fn set_arch(&mut self, width: ArchWidth) -> bool {
        self.arch.fix(width)
    }

    #[inline]
    pub fn arch(&self) -> Option<ArchWidth> {
        self.arch.get()
    }

    pub fn intern(&mut self, s: &str) -> Result<u64, WriteError> {
        let capacity = self.capacity;
        let arch = &mut self.arch;
        self.strings
            .get_or_insert_with(|| Interner::new(arch.resolve(), capacity))
            .intern(s)
    }

    /// Resolved width and the (possibly empty) string volume.
    pub fn finish(mut self) -> (ArchWidth, Interner) {
        let arch = self.arch.resolve();
        let capacity = self.capacity;
        let strings = self
            .strings
            .unwrap_or_else(|| Interner::new(arch, capacity));
        (arch, strings)
    }
}
