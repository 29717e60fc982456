use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type JsonMap = Map<String, Value>;

// ============ Request envelopes ============

/// Body of the four AI-pipeline endpoints.
///
/// `formData` is an open, per-feature record; handlers read the fields they
/// need defensively and map absent ones to the missing-data sentinel, so a
/// body with either field omitted is tolerated rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    #[serde(rename = "formData", default)]
    pub form_data: Value,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Query parameters of the typeahead location search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesQuery {
    #[serde(default)]
    pub q: String,
    /// "countries" | "places" | "all"
    #[serde(rename = "type", default = "default_search_type")]
    pub search_type: String,
}

fn default_search_type() -> String {
    "all".to_string()
}

// ============ Location search results ============

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryHit {
    pub name: String,
    #[serde(rename = "isoCode")]
    pub iso_code: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceHit {
    pub label: String,
    pub value: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct PlacesResponse {
    pub countries: Vec<CountryHit>,
    pub places: Vec<PlaceHit>,
}

// ============ Defensive accessors over untrusted AI/form JSON ============

/// Reads a string field, treating empty strings as absent. Numbers are
/// rendered to text since form fields arrive as either.
pub fn str_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a field that may be a string or an array of strings; arrays are
/// joined with `", "`.
pub fn str_or_list_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => str_field(value, key),
    }
}

/// Removes `key` from the map and returns it as a list of JSON objects.
/// Anything that is not an array of objects yields an empty list; the AI
/// response is untrusted input and a missing or malformed array must not
/// fail the request.
pub fn take_object_array(map: &mut JsonMap, key: &str) -> Vec<JsonMap> {
    match map.remove(key) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(o) => Some(o),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Reads an array of strings out of the map, skipping non-string items.
pub fn string_array(map: &JsonMap, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_request_tolerates_missing_fields() {
        let req: PlanRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.form_data.is_null());
        assert_eq!(req.language, "en");

        let req: PlanRequest =
            serde_json::from_value(json!({"formData": {"budget": 500}, "language": "az"}))
                .unwrap();
        assert_eq!(req.language, "az");
        assert_eq!(str_field(&req.form_data, "budget").as_deref(), Some("500"));
    }

    #[test]
    fn str_field_treats_empty_as_absent() {
        let v = json!({"a": "", "b": "  ", "c": "x"});
        assert_eq!(str_field(&v, "a"), None);
        assert_eq!(str_field(&v, "b"), None);
        assert_eq!(str_field(&v, "c").as_deref(), Some("x"));
        assert_eq!(str_field(&v, "missing"), None);
    }

    #[test]
    fn str_or_list_field_joins_arrays() {
        let v = json!({"continent": ["Asia", "Europe"], "single": "Africa"});
        assert_eq!(
            str_or_list_field(&v, "continent").as_deref(),
            Some("Asia, Europe")
        );
        assert_eq!(str_or_list_field(&v, "single").as_deref(), Some("Africa"));
        assert_eq!(str_or_list_field(&v, "empty"), None);
    }

    #[test]
    fn take_object_array_is_defensive() {
        let mut map = json!({
            "spots": [{"name": "A"}, "stray", {"name": "B"}],
            "not_array": "x",
        });
        let map = map.as_object_mut().unwrap();

        let spots = take_object_array(map, "spots");
        assert_eq!(spots.len(), 2);
        assert!(!map.contains_key("spots"));

        assert!(take_object_array(map, "not_array").is_empty());
        assert!(take_object_array(map, "missing").is_empty());
    }
}
