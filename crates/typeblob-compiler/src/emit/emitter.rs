//! Blob assembly.

use tracing::debug;
use typeblob_core::ArchWidth;
use typeblob_format::Header;

use super::asm::render_asm;
use super::type_table::encode_types;
use crate::Result;
use crate::merge::TypeGraph;

/// A fully encoded blob and its assembly mirror, not yet written anywhere.
#[derive(Clone, Debug)]
pub struct Emitted {
    pub arch: ArchWidth,
    /// Header, string volume and type table, back to back.
    pub blob: Vec<u8>,
    pub asm: String,
}

/// Encode a merged graph.
///
/// `capacity` bounds the type table section, just as it bounded the string
/// volume while parsing.
pub fn emit(graph: &TypeGraph, capacity: usize) -> Result<Emitted> {
    let arch = graph.arch();
    let volume = graph.strings().volume();
    let table = encode_types(graph, capacity)?;

    let header = Header::for_volume(arch, volume.len()).to_bytes(arch)?;

    let mut blob = Vec::with_capacity(header.len() + volume.len() + table.len());
    blob.extend_from_slice(&header);
    blob.extend_from_slice(volume);
    blob.extend_from_slice(&table);

    debug!(
        types = graph.len(),
        strings = graph.strings().len(),
        bytes = blob.len(),
        "encoded reflection blob"
    );

    let asm = render_asm(&blob);
    Ok(Emitted { arch, blob, asm })
}
