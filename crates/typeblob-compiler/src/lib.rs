//! typeblob compiler: descriptor parsing, merging, and blob emission.
//!
//! Pipeline, one stage per module:
//! - `descriptor` - line lexer and per-file parser producing [`TypeRecord`]s
//! - `merge` - discovery, mtime-ordered last-writer-wins merge, id assignment
//! - `emit` - header + string volume + type table, and the assembly mirror

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod descriptor;
pub mod emit;
pub mod merge;
pub mod types;

#[cfg(test)]
pub mod test_utils;
#[cfg(test)]
mod types_tests;

use std::path::PathBuf;

pub use emit::{Emitted, emit};
pub use merge::{MergeOptions, MergeStats, Merger, TypeGraph, discover, merge_dir};
pub use types::{EnumeratorDescriptor, FieldDescriptor, TypeBody, TypeRecord};

/// Errors that abort a run.
///
/// Per-line and per-file problems never surface here: they are logged and
/// recovered from where they happen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// String volume or type table exceeded its preallocated capacity.
    #[error(transparent)]
    Overflow(#[from] typeblob_core::WriteError),

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize type table: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
