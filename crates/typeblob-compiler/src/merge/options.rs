//! Configuration for a merge run.

/// Default size, in bytes, of each preallocated output buffer.
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// File name suffix identifying descriptor files.
pub const DESCRIPTOR_SUFFIX: &str = ".reflection.dat";

/// Options shared by discovery, merging and emission.
#[derive(Clone, Debug)]
pub struct MergeOptions {
    /// Capacity of the string volume and of the type table, each.
    pub(crate) capacity: usize,
    /// Only files whose name ends with this suffix are merged.
    pub(crate) suffix: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            suffix: DESCRIPTOR_SUFFIX.to_owned(),
        }
    }
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-buffer capacity in bytes.
    pub fn capacity(mut self, bytes: usize) -> Self {
        self.capacity = bytes;
        self
    }

    /// Set the descriptor file name suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn buffer_capacity(&self) -> usize {
        self.capacity
    }

    pub fn file_suffix(&self) -> &str {
        &self.suffix
    }
}
