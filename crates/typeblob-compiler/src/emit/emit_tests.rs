use indoc::indoc;
use typeblob_core::ArchWidth;
use typeblob_format::{Blob, DecodedMembers, TypeCode};

use super::emit;
use crate::Error;
use crate::test_utils::{dump_sources, emit_sources, merge_sources};

#[test]
fn point_example() {
    let out = dump_sources(&[indoc! {"
        arch 8
        base
        name int
        size 4
        struct
        name Point
        size 8
        field
        name x
        type int
        offset 0
        pdepth 0
        arrsize 0
        const false
        isstruct false
    "}]);

    insta::assert_snapshot!(out, @r#"
    [header]
    arch    8
    strings @16
    table   @28

    [strings]
    @16 "int"
    @20 "Point"
    @26 "x"

    [types]
    T1 base int size=4
    T2 struct Point size=8
      x @0: int
    "#);
}

#[test]
fn blob_is_header_volume_and_table() {
    let (graph, emitted) = emit_sources(&["base\nname int\nsize 4\n"]);

    assert_eq!(emitted.arch, ArchWidth::Eight);
    assert_eq!(&emitted.blob[..8], &16i64.to_le_bytes());
    assert_eq!(&emitted.blob[8..16], &20i64.to_le_bytes());
    assert_eq!(&emitted.blob[16..20], graph.strings().volume());
    assert_eq!(emitted.blob.len(), 16 + 4 + 8 + 25);
}

#[test]
fn forward_references_resolve() {
    let (_, emitted) = emit_sources(&[indoc! {"
        struct
        name List
        size 8
        field
        name head
        type Node
        pdepth 1
        isstruct true
        struct
        name Node
        size 16
        field
        name next
        type Node
        offset 8
        pdepth 1
        isstruct true
    "}]);
    let blob = Blob::decode(&emitted.blob, emitted.arch).unwrap();

    let DecodedMembers::Fields(fields) = &blob.type_by_id(1).unwrap().members else {
        panic!("expected fields");
    };
    assert_eq!(fields[0].type_id, 2);
    let DecodedMembers::Fields(fields) = &blob.type_by_id(2).unwrap().members else {
        panic!("expected fields");
    };
    assert_eq!(fields[0].type_id, 2);
}

#[test]
fn unresolved_struct_like_fields_are_dropped() {
    let (_, emitted) = emit_sources(&[indoc! {"
        struct
        name Outer
        size 16
        field
        name known
        type Inner
        isstruct true
        field
        name gone
        type Missing
        isstruct true
        field
        name prim
        type mystery_t
        offset 8
        isstruct false
        struct
        name Inner
        size 4
    "}]);
    let blob = Blob::decode(&emitted.blob, emitted.arch).unwrap();

    let outer = blob.type_by_id(1).unwrap();
    let DecodedMembers::Fields(fields) = &outer.members else {
        panic!("expected fields");
    };
    let summary: Vec<_> = fields.iter().map(|f| (f.name.as_str(), f.type_id)).collect();
    assert_eq!(summary, vec![("known", 2), ("prim", 0)]);
}

#[test]
fn four_byte_arch_wraps_negative_enumerators() {
    let (_, emitted) = emit_sources(&["arch 4\nenum\nname E\nsize 4\nenumerator\nek Neg\nev -1\n"]);
    let blob = Blob::decode(&emitted.blob, ArchWidth::Four).unwrap();

    let DecodedMembers::Enumerators(enumerators) = &blob.types()[0].members else {
        panic!("expected enumerators");
    };
    assert_eq!(enumerators[0].value, i64::from(u32::MAX));
}

#[test]
fn decoded_blob_matches_graph() {
    let (graph, emitted) = emit_sources(&[
        indoc! {"
            arch 4
            base
            name int
            size 4
            union
            name U
            size 4
            field
            name i
            type int
            field
            name f
            type float
        "},
        indoc! {"
            enum
            name Mode
            size 4
            enumerator
            ek On
            ev 1
            base
            name float
            size 4
        "},
    ]);
    let blob = Blob::decode(&emitted.blob, emitted.arch).unwrap();

    assert_eq!(blob.types().len(), graph.len());
    for (decoded, record) in blob.types().iter().zip(graph.iter()) {
        assert_eq!(decoded.id, u64::from(record.id.get()));
        assert_eq!(decoded.code, record.code());
        assert_eq!(decoded.name, record.name);
        assert_eq!(decoded.size, record.size);
        assert_eq!(decoded.members.len(), record.body.member_count());
    }

    let union = blob.type_by_id(2).unwrap();
    assert_eq!(union.code, TypeCode::Union);
    let DecodedMembers::Fields(fields) = &union.members else {
        panic!("expected fields");
    };
    assert_eq!(fields[1].type_id, 4);
}

#[test]
fn empty_graph_emits_empty_table() {
    let (_, emitted) = emit_sources(&[]);

    let mut expected = Vec::new();
    expected.extend_from_slice(&16i64.to_le_bytes());
    expected.extend_from_slice(&16i64.to_le_bytes());
    expected.extend_from_slice(&0i64.to_le_bytes());
    assert_eq!(emitted.blob, expected);
}

#[test]
fn table_overflow_is_an_error() {
    let graph = merge_sources(&["base\nname int\nsize 4\n"]);

    let err = emit(&graph, 16).unwrap_err();

    assert!(matches!(err, Error::Overflow(_)));
}
