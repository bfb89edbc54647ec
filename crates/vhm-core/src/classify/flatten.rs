//! Dotted-key flattening of nested JSON objects.

use serde_json::Value;
use std::collections::BTreeMap;

/// Recursion limit for pathological descriptors; editor payloads are a few
/// levels deep at most. Objects at the limit are stringified as leaves.
const MAX_DEPTH: usize = 32;

/// Flattens `value` into `out` under `prefix`, joining nested object keys
/// with dots: `{"settings":{"host":"x"}}` under `config` becomes
/// `config.settings.host = "x"`.
///
/// String leaves are inserted without JSON quoting; every other leaf
/// (numbers, booleans, null, arrays) is its compact JSON text. An empty
/// object contributes nothing.
pub(super) fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    flatten_depth(prefix, value, out, 0);
}

fn flatten_depth(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>, depth: usize) {
    match value {
        Value::Object(map) if depth < MAX_DEPTH => {
            for (key, nested) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_depth(&key, nested, out, depth + 1);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat(value: Value) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        flatten_into("config", &value, &mut out);
        out
    }

    #[test]
    fn nested_objects_become_dotted_keys() {
        let out = flat(json!({"settings": {"host": "x", "port": 22}, "name": "n"}));
        assert_eq!(out.get("config.settings.host").map(String::as_str), Some("x"));
        assert_eq!(out.get("config.settings.port").map(String::as_str), Some("22"));
        assert_eq!(out.get("config.name").map(String::as_str), Some("n"));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn non_string_leaves_are_json_text() {
        let out = flat(json!({"a": true, "b": null, "c": 1.5}));
        assert_eq!(out.get("config.a").map(String::as_str), Some("true"));
        assert_eq!(out.get("config.b").map(String::as_str), Some("null"));
        assert_eq!(out.get("config.c").map(String::as_str), Some("1.5"));
    }

    #[test]
    fn arrays_are_leaves() {
        let out = flat(json!({"mounts": ["a", "b"]}));
        assert_eq!(
            out.get("config.mounts").map(String::as_str),
            Some(r#"["a","b"]"#)
        );
    }

    #[test]
    fn empty_object_contributes_nothing() {
        assert!(flat(json!({})).is_empty());
    }

    #[test]
    fn depth_is_bounded() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH * 2) {
            value = json!({ "n": value });
        }
        let out = flat(value);
        // Exactly one entry: the chain bottoms out as a stringified object
        // once the bound is hit instead of recursing forever.
        assert_eq!(out.len(), 1);
        let (key, leaf) = out.iter().next().unwrap();
        assert!(key.starts_with("config.n"));
        assert!(leaf.contains("leaf"));
    }
}
