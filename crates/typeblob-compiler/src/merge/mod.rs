//! Descriptor discovery and last-writer-wins merging.
//!
//! Files are merged oldest first. A later record replaces an earlier record
//! of the same name, but the name keeps the table position it was first seen
//! at. Once every file is merged, ids `1..=N` are assigned in table order.

mod discover;
mod graph;
mod merger;
mod options;

#[cfg(test)]
mod merger_tests;

pub use discover::discover;
pub use graph::TypeGraph;
pub use merger::{MergeStats, Merger, merge_dir, merge_files};
pub use options::{DEFAULT_CAPACITY, DESCRIPTOR_SUFFIX, MergeOptions};
