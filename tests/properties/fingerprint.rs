//! Property tests for argument fingerprints.

use proptest::prelude::*;
use serde_json::Value;

use solbundle::ArgsFingerprint;

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _\\-\"\\\\]{0,16}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn object_text(pairs: &[(String, Value)]) -> String {
    let body: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), v))
        .collect();
    format!("{{{}}}", body.join(","))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fingerprints are well-formed sha256 digests for any argument bag.
    #[test]
    fn property_fingerprint_is_sha256_hex(value in json_value()) {
        let fp = ArgsFingerprint::of(&value);
        prop_assert!(fp.as_str().starts_with("sha256:"));
        prop_assert_eq!(fp.hex().len(), 64);
        prop_assert!(fp.hex().chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// PROPERTY: Re-parsing the serialized value yields the same fingerprint.
    #[test]
    fn property_fingerprint_survives_reserialization(value in json_value()) {
        let reparsed: Value = serde_json::from_str(&value.to_string()).unwrap();
        prop_assert_eq!(ArgsFingerprint::of(&value), ArgsFingerprint::of(&reparsed));
    }

    /// PROPERTY: Key order in named arguments never changes the fingerprint.
    #[test]
    fn property_named_args_order_independent(
        map in proptest::collection::btree_map("[a-z]{1,6}", json_leaf(), 1..6),
    ) {
        let forward: Vec<(String, Value)> = map.clone().into_iter().collect();
        let backward: Vec<(String, Value)> = map.into_iter().rev().collect();

        let a: Value = serde_json::from_str(&object_text(&forward)).unwrap();
        let b: Value = serde_json::from_str(&object_text(&backward)).unwrap();
        prop_assert_eq!(ArgsFingerprint::of(&a), ArgsFingerprint::of(&b));
    }

    /// PROPERTY: Swapping two distinct positional arguments changes the fingerprint.
    #[test]
    fn property_positional_args_order_dependent(a in json_leaf(), b in json_leaf()) {
        prop_assume!(a != b);
        let ab = Value::Array(vec![a.clone(), b.clone()]);
        let ba = Value::Array(vec![b, a]);
        prop_assert_ne!(ArgsFingerprint::of(&ab), ArgsFingerprint::of(&ba));
    }
}
