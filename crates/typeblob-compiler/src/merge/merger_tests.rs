use indoc::indoc;
use typeblob_core::ArchWidth;
use typeblob_format::TypeId;

use super::{MergeOptions, MergeStats, Merger};
use crate::test_utils::merge_sources;
use crate::types::TypeBody;

const POINT: &str = indoc! {"
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
"};

#[test]
fn ids_follow_first_seen_order() {
    let graph = merge_sources(&[POINT]);

    assert_eq!(graph.resolve("int"), Some(TypeId(1)));
    assert_eq!(graph.resolve("Point"), Some(TypeId(2)));
    assert_eq!(graph.resolve("double"), None);
    assert_eq!(graph.arch(), ArchWidth::Eight);
}

#[test]
fn later_declaration_overrides_but_keeps_position() {
    let newer = indoc! {"
        struct
        name Point
        size 12
        field
        name y
        type int
        offset 4
    "};
    let graph = merge_sources(&[POINT, "base\nname char\nsize 1\n", newer]);

    let names: Vec<_> = graph.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["int", "Point", "char"]);

    let point = graph.get("Point").unwrap();
    assert_eq!(point.id, TypeId(2));
    assert_eq!(point.size, 12);
    let TypeBody::Struct { fields } = &point.body else {
        panic!("expected struct");
    };
    let field_names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(field_names, vec!["y"]);
    assert_eq!(graph.stats().overrides, 1);
}

#[test]
fn override_may_change_kind() {
    let graph = merge_sources(&[
        "struct\nname handle\nsize 8\n",
        "base\nname handle\nsize 8\n",
    ]);

    assert_eq!(graph.get("handle").unwrap().body, TypeBody::Base);
    assert_eq!(graph.len(), 1);
}

#[test]
fn ids_are_dense() {
    let graph = merge_sources(&[
        "base\nname a\nbase\nname b\n",
        "base\nname c\nbase\nname a\n",
        "base\nname d\n",
    ]);

    let ids: Vec<_> = graph.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn strings_are_shared_across_files() {
    let graph = merge_sources(&[POINT, POINT]);

    assert_eq!(graph.strings().len(), 3);
    assert_eq!(graph.string_offset("int"), 16);
    assert_eq!(graph.string_offset("Point"), 20);
    assert_eq!(graph.string_offset("x"), 26);
    assert_eq!(graph.string_offset("missing"), 0);
}

#[test]
fn records_parsed_and_overrides_are_counted() {
    let mut merger = Merger::new(&MergeOptions::default());
    assert_eq!(merger.add_source(POINT).unwrap(), 2);
    assert_eq!(merger.add_source(POINT).unwrap(), 2);
    let graph = merger.finish();

    assert_eq!(
        *graph.stats(),
        MergeStats {
            records_parsed: 4,
            overrides: 2,
            ..MergeStats::default()
        }
    );
}

#[test]
fn empty_input_defaults_to_eight_byte_arch() {
    let graph = merge_sources(&[]);

    assert!(graph.is_empty());
    assert_eq!(graph.arch(), ArchWidth::Eight);
    assert!(graph.strings().is_empty());
}

#[test]
fn capacity_bounds_the_string_volume() {
    let mut merger = Merger::new(&MergeOptions::new().capacity(4));

    assert!(merger.add_source("base\nname int\n").is_ok());
    assert!(merger.add_source("base\nname long\n").is_err());
}

#[test]
fn json_keeps_everything_the_blob_drops() {
    let graph = merge_sources(&[indoc! {"
        arch 4
        struct
        name S
        alias S_t
        size 4
        field
        name inner
        type Missing
        isstruct true
    "}]);

    insta::assert_snapshot!(graph.to_json().unwrap(), @r#"
    {
      "S": {
        "name": "S",
        "id": 1,
        "size": 4,
        "aliases": [
          "S_t"
        ],
        "type": "struct",
        "fields": [
          {
            "name": "inner",
            "type": "Missing",
            "offset": 0,
            "pointer_depth": 0,
            "array_size": 0,
            "is_const": false,
            "is_struct_like": true
          }
        ]
      }
    }
    "#);
}
