//! Sorted-key JSON canonicalisation.

use serde_json::{Map, Value};

use crate::CodecError;

/// Re-encode a JSON document compactly with every object's keys in
/// lexicographic byte order.
///
/// Keys are re-inserted in sorted order explicitly so the result does not
/// depend on whether `serde_json` was built with `preserve_order`.
pub fn sort_json(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let value: Value = serde_json::from_slice(data)?;
    Ok(serde_json::to_vec(&canonicalize(value))?)
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, inner) in entries {
                sorted.insert(key, canonicalize(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_nested_keys() {
        let sorted = sort_json(br#"{"b":1,"a":{"z":true,"c":[{"y":1,"x":2}]}}"#).unwrap();
        assert_eq!(
            String::from_utf8(sorted).unwrap(),
            r#"{"a":{"c":[{"x":2,"y":1}],"z":true},"b":1}"#
        );
    }

    #[test]
    fn strips_whitespace() {
        let sorted = sort_json(b"{ \"a\" : [ 1 , 2 ] }").unwrap();
        assert_eq!(sorted, br#"{"a":[1,2]}"#);
    }

    #[test]
    fn array_order_is_preserved() {
        let sorted = sort_json(br#"["b","a"]"#).unwrap();
        assert_eq!(sorted, br#"["b","a"]"#);
    }

    #[test]
    fn idempotent() {
        let once = sort_json(br#"{"value":{"chains":["0001"],"pubkey":"00"},"type":"t"}"#).unwrap();
        let twice = sort_json(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            sort_json(b"{not json").unwrap_err(),
            CodecError::Malformed(_)
        ));
    }
}
