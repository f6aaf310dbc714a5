//! Public API checks against known vectors.

use primarykey::{Id, IdError, StorageValue};
use serde::{Deserialize, Serialize};

const TEST_UUID: &str = "7d444840-9dc0-11d1-b245-5ffdce74fad2";
const TEST_SHORT: &str = "QJQQv92onGb5t9gCsNLDgT";
const TEST_BYTES: [u8; 16] = [
    0x7d, 0x44, 0x48, 0x40, 0x9d, 0xc0, 0x11, 0xd1, 0xb2, 0x45, 0x5f, 0xfd, 0xce, 0x74, 0xfa, 0xd2,
];

#[test]
fn test_encode() {
    let id = Id::from_bytes(&TEST_BYTES).unwrap();
    assert_eq!(primarykey::encode(id), TEST_SHORT);
}

#[test]
fn test_decode() {
    let id = primarykey::decode(TEST_SHORT).unwrap();
    assert_eq!(id.into_bytes(), TEST_BYTES);
    assert!(primarykey::decode("1234123441234")
        .unwrap_err()
        .is_parse_error());
}

#[test]
fn test_must_decode_invalid_panics() {
    let result = std::panic::catch_unwind(|| primarykey::must_decode("1234123441234"));
    assert!(result.is_err());
}

#[test]
fn test_new_is_not_degenerate() {
    let ids: std::collections::HashSet<Id> = (0..64).map(|_| primarykey::new()).collect();
    assert_eq!(ids.len(), 64);
    assert!(!ids.contains(&Id::empty()));
}

#[test]
fn test_value() {
    let id = Id::from_bytes(&TEST_BYTES).unwrap();
    match id.to_storage_value() {
        StorageValue::Text(text) => assert_eq!(text, TEST_UUID),
        other => panic!("unexpected storage value: {other:?}"),
    }
}

#[test]
fn test_scan() {
    let mut id = Id::empty();
    id.scan(TEST_UUID.into()).unwrap();
    assert_eq!(id.to_string(), TEST_SHORT);

    let mut id = Id::empty();
    id.scan(TEST_BYTES.to_vec().into()).unwrap();
    assert_eq!(id.to_string(), TEST_SHORT);

    let mut id = Id::empty();
    id.scan(StorageValue::Null).unwrap();
    assert!(id.is_empty());

    let mut id = Id::empty();
    assert_eq!(
        id.scan(123i64.into()),
        Err(IdError::UnsupportedSourceType("int".to_string()))
    );
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Model {
    #[serde(rename = "ID")]
    id: Id,
    parent: Option<Id>,
}

#[test]
fn test_json_model_roundtrip() {
    let m = Model {
        id: Id::must_decode("gXeZJmzG3xwqWdJeumvbFy"),
        parent: None,
    };
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"ID":"gXeZJmzG3xwqWdJeumvbFy","parent":null}"#);
    let parsed: Model = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, m);

    let with_parent: Model =
        serde_json::from_str(&format!(r#"{{"ID":"gXeZJmzG3xwqWdJeumvbFy","parent":"{TEST_SHORT}"}}"#))
            .unwrap();
    assert_eq!(with_parent.parent.unwrap().to_uuid_string(), TEST_UUID);
}
