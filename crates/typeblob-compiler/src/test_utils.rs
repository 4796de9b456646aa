//! Test helpers: merge in-memory descriptors and inspect the result.

use typeblob_core::Colors;
use typeblob_format::{Blob, dump};

use crate::emit::{Emitted, emit};
use crate::merge::{MergeOptions, Merger, TypeGraph};

/// Merge descriptor sources in order, as if each were a file, oldest first.
pub fn merge_sources(sources: &[&str]) -> TypeGraph {
    let mut merger = Merger::new(&MergeOptions::default());
    for source in sources {
        merger.add_source(source).expect("string volume overflow");
    }
    merger.finish()
}

pub fn emit_sources(sources: &[&str]) -> (TypeGraph, Emitted) {
    let graph = merge_sources(sources);
    let emitted = emit(&graph, MergeOptions::default().buffer_capacity()).expect("emit failed");
    (graph, emitted)
}

/// Merge, emit, decode and render the uncoloured dump.
pub fn dump_sources(sources: &[&str]) -> String {
    let (_, emitted) = emit_sources(sources);
    let blob = Blob::decode(&emitted.blob, emitted.arch).expect("emitted blob must decode");
    dump(&blob, Colors::OFF)
}
