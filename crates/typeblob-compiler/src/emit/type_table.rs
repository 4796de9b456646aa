//! Type table encoding.

use typeblob_core::{ByteWriter, WriteError};
use typeblob_format::TypeId;

use crate::merge::TypeGraph;
use crate::types::{EnumeratorDescriptor, FieldDescriptor, TypeBody, TypeRecord};

/// Encode the type table section: record count, then one entry per record
/// in id order.
pub fn encode_types(graph: &TypeGraph, capacity: usize) -> Result<Vec<u8>, WriteError> {
    let mut w = ByteWriter::new(capacity, graph.arch());
    w.write_arch(graph.len() as i64)?;
    for record in graph.iter() {
        encode_record(&mut w, graph, record)?;
    }
    Ok(w.into_bytes())
}

fn encode_record(w: &mut ByteWriter, graph: &TypeGraph, record: &TypeRecord) -> Result<(), WriteError> {
    w.write_arch(i64::from(record.id.get()))?;
    w.write_u8(record.code() as u8)?;
    w.write_arch(graph.string_offset(&record.name))?;
    w.write_arch(record.size)?;

    match &record.body {
        TypeBody::Base => Ok(()),
        TypeBody::Struct { fields } | TypeBody::Union { fields } => {
            with_count(w, |w| encode_fields(w, graph, fields))
        }
        TypeBody::Enum { enumerators } => with_count(w, |w| encode_enumerators(w, graph, enumerators)),
    }
}

/// Write a count placeholder, run `body`, then patch in the number of
/// members it actually wrote.
fn with_count(
    w: &mut ByteWriter,
    body: impl FnOnce(&mut ByteWriter) -> Result<usize, WriteError>,
) -> Result<(), WriteError> {
    let slot = w.position();
    w.write_arch(0)?;
    let count = body(w)?;
    w.patch_arch(slot, count as i64)
}

fn encode_fields(w: &mut ByteWriter, graph: &TypeGraph, fields: &[FieldDescriptor]) -> Result<usize, WriteError> {
    let mut count = 0;
    for field in fields {
        let target = graph.resolve(&field.type_name);
        // A struct-like reference that never got a record cannot be
        // represented; the field is left out entirely.
        if field.is_struct_like && target.is_none() {
            continue;
        }
        w.write_arch(graph.string_offset(&field.name))?;
        w.write_bool(field.is_const)?;
        w.write_u32(field.pointer_depth)?;
        w.write_arch(field.offset)?;
        w.write_arch(field.array_size)?;
        w.write_arch(i64::from(target.unwrap_or(TypeId::UNRESOLVED).get()))?;
        count += 1;
    }
    Ok(count)
}

fn encode_enumerators(
    w: &mut ByteWriter,
    graph: &TypeGraph,
    enumerators: &[EnumeratorDescriptor],
) -> Result<usize, WriteError> {
    for e in enumerators {
        w.write_arch(graph.string_offset(&e.name))?;
        w.write_arch(e.value)?;
    }
    Ok(enumerators.len())
}
