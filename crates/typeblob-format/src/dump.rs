//! Human-readable dump of a decoded blob, for debugging producer output.

use std::fmt::Write as _;

use typeblob_core::Colors;

use crate::decode::{Blob, DecodedField, DecodedMembers};

/// Render header, string volume and type table.
pub fn dump(blob: &Blob<'_>, colors: Colors) -> String {
    let mut out = String::new();

    dump_header(&mut out, blob, &colors);
    dump_strings(&mut out, blob, &colors);
    dump_types(&mut out, blob, &colors);

    out
}

fn dump_header(out: &mut String, blob: &Blob<'_>, c: &Colors) {
    let header = blob.header();

    writeln!(out, "{}[header]{}", c.kind, c.reset).unwrap();
    writeln!(out, "arch    {}", blob.arch().bytes()).unwrap();
    writeln!(out, "strings {}@{}{}", c.meta, header.strings_offset, c.reset).unwrap();
    writeln!(out, "table   {}@{}{}", c.meta, header.table_offset, c.reset).unwrap();
    out.push('\n');
}

fn dump_strings(out: &mut String, blob: &Blob<'_>, c: &Colors) {
    writeln!(out, "{}[strings]{}", c.kind, c.reset).unwrap();
    for (offset, s) in blob.strings() {
        writeln!(out, "{}@{offset}{} {}{s:?}{}", c.meta, c.reset, c.name, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_types(out: &mut String, blob: &Blob<'_>, c: &Colors) {
    writeln!(out, "{}[types]{}", c.kind, c.reset).unwrap();
    for ty in blob.types() {
        writeln!(
            out,
            "T{} {}{}{} {}{}{} {}size={}{}",
            ty.id,
            c.kind,
            ty.code.keyword(),
            c.reset,
            c.name,
            ty.name,
            c.reset,
            c.meta,
            ty.size,
            c.reset
        )
        .unwrap();

        match &ty.members {
            DecodedMembers::None => {}
            DecodedMembers::Fields(fields) => {
                for field in fields {
                    let target = describe_target(blob, field);
                    writeln!(
                        out,
                        "  {}{}{} {}@{}{}: {target}",
                        c.name, field.name, c.reset, c.meta, field.offset, c.reset
                    )
                    .unwrap();
                }
            }
            DecodedMembers::Enumerators(enumerators) => {
                for e in enumerators {
                    writeln!(out, "  {}{}{} = {}", c.name, e.name, c.reset, e.value).unwrap();
                }
            }
        }
    }
}

/// Deeper pointer chains are written as `*^N`; the depth comes straight from
/// the descriptor and is not bounded.
const MAX_SPELLED_POINTERS: u32 = 8;

/// `const int*[4]`-style rendering of a field's declared type.
fn describe_target(blob: &Blob<'_>, field: &DecodedField) -> String {
    let mut s = String::new();
    if field.is_const {
        s.push_str("const ");
    }
    match blob.type_by_id(field.type_id) {
        Some(ty) => s.push_str(&ty.name),
        None => s.push('?'),
    }
    if field.pointer_depth <= MAX_SPELLED_POINTERS {
        for _ in 0..field.pointer_depth {
            s.push('*');
        }
    } else {
        write!(s, "*^{}", field.pointer_depth).unwrap();
    }
    if field.array_size > 0 {
        write!(s, "[{}]", field.array_size).unwrap();
    }
    s
}
