//! Binary emission from a merged type graph.
//!
//! The blob is the header, the string volume exactly as the interner built
//! it, and the type table. The assembly mirror carries the same bytes.

mod asm;
mod emitter;
mod output;
mod type_table;

#[cfg(test)]
mod emit_tests;

pub use asm::render_asm;
pub use emitter::{Emitted, emit};
pub use output::{ASM_FILE, BLOB_FILE, JSON_FILE, Written, write_outputs};
pub use type_table::encode_types;
