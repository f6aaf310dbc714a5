use primarykey::{Id, IdError, StorageValue, ALPHABET, MAX_LEN};
use proptest::prelude::*;

fn arb_id() -> impl Strategy<Value = Id> {
    prop_oneof![
        any::<[u8; 16]>().prop_map(Id::from_array),
        // Small magnitudes exercise the short encodings.
        (0u128..57u128.pow(4)).prop_map(Id::from_u128),
        Just(Id::empty()),
        Just(Id::from_array([0xff; 16])),
    ]
}

fn arb_short_char() -> impl Strategy<Value = char> {
    proptest::sample::select(ALPHABET.chars().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn short_form_roundtrip(id in arb_id()) {
        let s = id.encode();
        prop_assert!(!s.is_empty() && s.len() <= MAX_LEN);
        prop_assert!(s.chars().all(|c| ALPHABET.contains(c)));
        prop_assert_eq!(Id::decode(&s).unwrap(), id);
    }

    #[test]
    fn long_form_roundtrip(id in arb_id()) {
        let s = id.to_uuid_string();
        prop_assert_eq!(s.len(), 36);
        prop_assert_eq!(s.to_lowercase(), s.clone());
        prop_assert_eq!(Id::parse_uuid(&s).unwrap(), id);
    }

    #[test]
    fn bytes_roundtrip(bytes in any::<[u8; 16]>()) {
        let id = Id::from_bytes(&bytes).unwrap();
        prop_assert_eq!(id.into_bytes(), bytes);
        let via_long = Id::parse_uuid(&id.to_uuid_string()).unwrap();
        let via_short = Id::decode(&id.to_string()).unwrap();
        prop_assert_eq!(via_long, id);
        prop_assert_eq!(via_short, id);
    }

    #[test]
    fn storage_roundtrip(id in arb_id()) {
        prop_assert_eq!(Id::from_storage_value(id.to_storage_value()).unwrap(), Some(id));
        let bytes = StorageValue::from(&id.as_bytes()[..]);
        prop_assert_eq!(Id::from_storage_value(bytes).unwrap(), Some(id));
        let text_bytes = StorageValue::from(id.to_uuid_string().into_bytes());
        prop_assert_eq!(Id::from_storage_value(text_bytes).unwrap(), Some(id));
    }

    #[test]
    fn json_roundtrip(id in arb_id()) {
        let json = serde_json::to_string(&id).unwrap();
        prop_assert_eq!(&json, &format!("\"{}\"", id.encode()));
        let parsed: Id = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn ordering_matches_bytes(a in arb_id(), b in arb_id()) {
        prop_assert_eq!(a.cmp(&b), a.as_bytes().cmp(b.as_bytes()));
        prop_assert_eq!(a == b, a.as_bytes() == b.as_bytes());
    }

    #[test]
    fn shorter_strings_always_decode(chars in prop::collection::vec(arb_short_char(), 1..MAX_LEN)) {
        // Any string of up to 21 digits fits in 128 bits.
        let s: String = chars.into_iter().collect();
        let id = Id::decode(&s).unwrap();
        let trimmed = s.trim_start_matches('2');
        let expected = if trimmed.is_empty() { "2" } else { trimmed };
        prop_assert_eq!(id.encode(), expected);
    }

    #[test]
    fn decode_rejects_foreign_characters(
        prefix in prop::collection::vec(arb_short_char(), 0..10),
        bad in "[01IOl_+/=-]",
    ) {
        let mut s: String = prefix.into_iter().collect();
        let position = s.len();
        s.push_str(&bad);
        let character = bad.chars().next().unwrap();
        prop_assert_eq!(Id::decode(&s), Err(IdError::InvalidCharacter { character, position }));
    }
}
