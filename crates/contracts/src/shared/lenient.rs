//! Tolerant deserializers for fields of upstream JSON payloads.
//!
//! Data files are hand-maintained, so a single bad cell must not reject the
//! whole month. Anything that is not a usable value becomes `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decimal field: accepts numbers and numeric strings (`"12.5"`, `"12.5%"`).
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Integer count field: non-negative whole numbers only.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u64))
}

/// Label field: strings as delivered, numbers in their JSON spelling.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::number")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "super::count")]
        purchases: Option<u64>,
        #[serde(default, deserialize_with = "super::text")]
        label: Option<String>,
    }

    fn parse(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 12.5}"#).value, Some(12.5));
        assert_eq!(parse(r#"{"value": "7"}"#).value, Some(7.0));
        assert_eq!(parse(r#"{"value": " 12.5% "}"#).value, Some(12.5));
    }

    #[test]
    fn test_malformed_values_become_none() {
        assert_eq!(parse(r#"{"value": "abc"}"#).value, None);
        assert_eq!(parse(r#"{"value": null}"#).value, None);
        assert_eq!(parse(r#"{"value": [1, 2]}"#).value, None);
        assert_eq!(parse(r#"{}"#).value, None);
    }

    #[test]
    fn test_count_rejects_fractions_and_negatives() {
        assert_eq!(parse(r#"{"purchases": 4}"#).purchases, Some(4));
        assert_eq!(parse(r#"{"purchases": "4"}"#).purchases, Some(4));
        assert_eq!(parse(r#"{"purchases": 4.5}"#).purchases, None);
        assert_eq!(parse(r#"{"purchases": -1}"#).purchases, None);
    }

    #[test]
    fn test_text_accepts_strings_and_numbers() {
        assert_eq!(parse(r#"{"label": "Lyon"}"#).label.as_deref(), Some("Lyon"));
        assert_eq!(parse(r#"{"label": 42}"#).label.as_deref(), Some("42"));
        assert_eq!(parse(r#"{"label": null}"#).label, None);
        assert_eq!(parse(r#"{"label": {"name": "x"}}"#).label, None);
        assert_eq!(parse(r#"{"label": true}"#).label, None);
    }
}
