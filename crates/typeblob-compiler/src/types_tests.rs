use typeblob_format::{TypeCode, TypeId};

use crate::types::{EnumeratorDescriptor, TypeBody, TypeRecord};

#[test]
fn body_codes() {
    assert_eq!(TypeBody::Base.code(), TypeCode::Base);
    assert_eq!(TypeBody::empty(TypeCode::Union).code(), TypeCode::Union);
    assert_eq!(TypeBody::empty(TypeCode::Enum).member_count(), 0);
}

#[test]
fn base_record_json_shape() {
    let record = TypeRecord {
        name: "unsigned int".into(),
        id: TypeId(3),
        size: 4,
        aliases: Vec::new(),
        body: TypeBody::Base,
    };

    insta::assert_snapshot!(serde_json::to_string(&record).unwrap(), @r#"{"name":"unsigned int","id":3,"size":4,"type":"base"}"#);
}

#[test]
fn enum_record_json_shape() {
    let record = TypeRecord {
        name: "Color".into(),
        id: TypeId(1),
        size: 4,
        aliases: vec!["color_t".into()],
        body: TypeBody::Enum {
            enumerators: vec![EnumeratorDescriptor {
                name: "Red".into(),
                value: -1,
            }],
        },
    };

    insta::assert_snapshot!(serde_json::to_string(&record).unwrap(), @r#"{"name":"Color","id":1,"size":4,"aliases":["color_t"],"type":"enum","enumerators":[{"name":"Red","value":-1}]}"#);
}
