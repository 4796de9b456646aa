#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by every typeblob stage.
//!
//! - [`ArchContext`] / [`ArchWidth`]: the byte width of every size, offset,
//!   id and reference field in the output, fixed once per run.
//! - [`ByteWriter`]: fixed-capacity, append-only little-endian buffer.
//! - [`Interner`]: deduplicating string volume with absolute blob offsets.
//! - [`Colors`]: ANSI palette for the human-readable dump.

mod arch;
mod colors;
mod interner;
mod writer;

#[cfg(test)]
mod arch_tests;

pub use arch::{ArchContext, ArchWidth};
pub use colors::Colors;
pub use interner::Interner;
pub use writer::{ByteWriter, WriteError};
