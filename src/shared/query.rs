//! Flattening of JSON payloads into query-string pairs for GET requests.

use serde_json::Value;

/// Turn an object payload into `(key, value)` query pairs, in key order.
///
/// Strings go through as-is, numbers and booleans as their JSON text, `null`
/// is dropped, nested arrays/objects are sent as compact JSON. Anything other
/// than an object yields no pairs.
pub fn query_pairs(payload: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = payload else {
        return Vec::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        let pairs = query_pairs(&json!({"page": 2, "symbol": "USDT", "all": true}));
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("symbol".to_string(), "USDT".to_string()),
                ("all".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_null_dropped() {
        let pairs = query_pairs(&json!({"status": null, "limit": 10}));
        assert_eq!(pairs, vec![("limit".to_string(), "10".to_string())]);
    }

    #[test]
    fn test_nested_as_json() {
        let pairs = query_pairs(&json!({"ids": [1, 2]}));
        assert_eq!(pairs, vec![("ids".to_string(), "[1,2]".to_string())]);
    }

    #[test]
    fn test_non_object_has_no_pairs() {
        assert!(query_pairs(&Value::Null).is_empty());
        assert!(query_pairs(&json!("x")).is_empty());
        assert!(query_pairs(&json!({})).is_empty());
    }
}
