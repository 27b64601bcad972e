//! Field-level deserializers that turn missing, `null`, or wrongly typed
//! values into defaults instead of failing the whole record.
//!
//! Use together with `#[serde(default)]` so absent fields take the same path.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string field. Anything that is not a JSON string becomes `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// A list field. Non-arrays become empty; elements that fail to deserialize
/// are dropped.
pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A list field kept as raw JSON values, only counted downstream.
pub fn values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        name: String,
        #[serde(default, deserialize_with = "super::vec")]
        numbers: Vec<u32>,
    }

    #[test]
    fn missing_fields_default() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.name.is_empty());
        assert!(probe.numbers.is_empty());
    }

    #[test]
    fn null_and_wrong_types_default() {
        let probe: Probe = serde_json::from_str(r#"{"name": null, "numbers": "x"}"#).unwrap();
        assert!(probe.name.is_empty());
        assert!(probe.numbers.is_empty());

        let probe: Probe = serde_json::from_str(r#"{"name": 42}"#).unwrap();
        assert!(probe.name.is_empty());
    }

    #[test]
    fn bad_elements_are_dropped() {
        let probe: Probe = serde_json::from_str(r#"{"numbers": [1, "two", 3, -4]}"#).unwrap();
        assert_eq!(probe.numbers, vec![1, 3]);
    }
}
