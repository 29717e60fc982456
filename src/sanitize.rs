//! Structure-preserving replacement of sentinel tokens with display text.
//!
//! Not a security sanitizer. The model is instructed to emit the sentinel
//! strings below in place of values it cannot determine; this module swaps
//! them for user-facing messages before the response leaves the server.

use serde_json::Value;

pub const MISSING_DATA: &str = "[MISSING_DATA]";
pub const COULD_NOT_DETERMINE: &str = "[COULD_NOT_DETERMINE]";

pub const MISSING_DATA_MESSAGE: &str = "Data not provided";
pub const COULD_NOT_DETERMINE_MESSAGE: &str = "Could not be determined";

/// Recursively replaces placeholder strings in a JSON value with user-facing
/// messages. Only exact-match leaf strings change; keys, array lengths and
/// nesting are preserved, so the function is idempotent.
pub fn sanitize_placeholders(value: Value) -> Value {
    match value {
        Value::String(s) => match s.as_str() {
            MISSING_DATA => Value::String(MISSING_DATA_MESSAGE.to_string()),
            COULD_NOT_DETERMINE => Value::String(COULD_NOT_DETERMINE_MESSAGE.to_string()),
            _ => Value::String(s),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_placeholders).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, sanitize_placeholders(v)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_both_sentinels() {
        let input = json!({
            "a": "[MISSING_DATA]",
            "b": "[COULD_NOT_DETERMINE]",
            "c": "untouched",
        });
        let out = sanitize_placeholders(input);
        assert_eq!(out["a"], "Data not provided");
        assert_eq!(out["b"], "Could not be determined");
        assert_eq!(out["c"], "untouched");
    }

    #[test]
    fn recurses_into_arrays_and_objects() {
        let input = json!({
            "spots": [
                {"name": "[MISSING_DATA]", "rating": 5},
                {"name": "Old Town", "tags": ["[COULD_NOT_DETERMINE]", "walkable"]},
            ]
        });
        let out = sanitize_placeholders(input);
        assert_eq!(out["spots"][0]["name"], "Data not provided");
        assert_eq!(out["spots"][0]["rating"], 5);
        assert_eq!(out["spots"][1]["tags"][0], "Could not be determined");
        assert_eq!(out["spots"][1]["tags"][1], "walkable");
    }

    #[test]
    fn partial_sentinel_matches_pass_through() {
        let input = json!("prefix [MISSING_DATA] suffix");
        assert_eq!(
            sanitize_placeholders(input),
            json!("prefix [MISSING_DATA] suffix")
        );
    }

    #[test]
    fn non_string_leaves_untouched() {
        let input = json!({"n": 42, "f": 1.5, "b": true, "z": null});
        assert_eq!(sanitize_placeholders(input.clone()), input);
    }

    #[test]
    fn idempotent() {
        let input = json!({"a": "[MISSING_DATA]", "b": ["[COULD_NOT_DETERMINE]"]});
        let once = sanitize_placeholders(input);
        let twice = sanitize_placeholders(once.clone());
        assert_eq!(once, twice);
    }
}
