use serde_json::{Map, Value};

/// A single-level record: nested paths collapsed into `_`-joined keys, each
/// key holding a leaf value. Key order follows the source JSON.
pub type FlatRecord = Map<String, Value>;

/// Collapses arbitrarily nested JSON into a flat record, depth first.
///
/// Arrays are leaves: an array value is stored verbatim under its path,
/// never expanded into indexed keys.
pub fn flatten(value: &Value) -> FlatRecord {
    let mut flat = FlatRecord::new();
    flatten_into(value, String::new(), &mut flat);
    flat
}

fn flatten_into(value: &Value, path: String, flat: &mut FlatRecord) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}_{}", path, key)
                };
                flatten_into(child, child_path, flat);
            }
        }
        Value::Array(_) | Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            flat.insert(path, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_array_is_a_leaf() {
        let flat = flatten(&json!({"a": {"b": 1, "c": [1, 2]}}));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["a_b"], json!(1));
        assert_eq!(flat["a_c"], json!([1, 2]));
    }

    #[test]
    fn test_flatten_scalars_verbatim() {
        let flat = flatten(&json!({"s": "x", "n": 1.5, "b": true, "z": null}));
        assert_eq!(flat["s"], json!("x"));
        assert_eq!(flat["n"], json!(1.5));
        assert_eq!(flat["b"], json!(true));
        assert_eq!(flat["z"], Value::Null);
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let flat = flatten(&json!({"a": {"b": {"c": {"d": 7}}}}));
        assert_eq!(flat["a_b_c_d"], json!(7));
    }

    #[test]
    fn test_flatten_key_order_is_source_order() {
        let flat = flatten(&json!({"z": 1, "a": {"y": 2, "b": 3}, "m": 4}));
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a_y", "a_b", "m"]);
    }

    #[test]
    fn test_flatten_array_of_objects_not_expanded() {
        let flat = flatten(&json!({"rows": [{"x": 1}, {"x": 2}]}));
        assert_eq!(flat["rows"], json!([{"x": 1}, {"x": 2}]));
    }
}
