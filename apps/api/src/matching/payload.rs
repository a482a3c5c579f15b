//! Oracle payload — the untrusted JSON object returned by the model.
//!
//! Every field is optional. A missing field or one of the wrong type falls back to
//! zero / empty instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OraclePayload {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub inferred_core_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub inferred_preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub matched_core_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub matched_preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub missing_core_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub missing_preferred_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub core_match: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub preferred_match: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub overall_before_experience: f64,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub recommendations: Vec<String>,
}

impl OraclePayload {
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(object))
    }
}

/// Numbers pass through; numeric strings ("80", " 72.5 ") are parsed; anything else is 0.0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()).unwrap_or(0.0))
}

/// Keeps the string entries of an array; any non-array value becomes an empty list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> OraclePayload {
        match value {
            Value::Object(object) => OraclePayload::from_object(object).unwrap(),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_empty_object_defaults_every_field() {
        assert_eq!(payload(json!({})), OraclePayload::default());
    }

    #[test]
    fn test_full_payload_deserializes() {
        let p = payload(json!({
            "inferred_core_skills": ["python", "sql"],
            "inferred_preferred_skills": ["spark"],
            "matched_core_skills": ["python"],
            "matched_preferred_skills": [],
            "missing_core_skills": ["sql"],
            "missing_preferred_skills": ["spark"],
            "core_match": 50,
            "preferred_match": 0.0,
            "overall_before_experience": 35.5,
            "recommendations": ["Learn SQL"]
        }));
        assert_eq!(p.inferred_core_skills, vec!["python", "sql"]);
        assert_eq!(p.missing_core_skills, vec!["sql"]);
        assert_eq!(p.core_match, 50.0);
        assert_eq!(p.overall_before_experience, 35.5);
        assert_eq!(p.recommendations, vec!["Learn SQL"]);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let p = payload(json!({"core_match": "80", "preferred_match": " 62.5 "}));
        assert_eq!(p.core_match, 80.0);
        assert_eq!(p.preferred_match, 62.5);
    }

    #[test]
    fn test_wrong_typed_numbers_default_to_zero() {
        let p = payload(json!({
            "core_match": "high",
            "preferred_match": null,
            "overall_before_experience": [90]
        }));
        assert_eq!(p.core_match, 0.0);
        assert_eq!(p.preferred_match, 0.0);
        assert_eq!(p.overall_before_experience, 0.0);
    }

    #[test]
    fn test_wrong_typed_lists_default_to_empty() {
        let p = payload(json!({
            "matched_core_skills": "python",
            "recommendations": {"tip": "x"},
            "missing_core_skills": null
        }));
        assert!(p.matched_core_skills.is_empty());
        assert!(p.recommendations.is_empty());
        assert!(p.missing_core_skills.is_empty());
    }

    #[test]
    fn test_non_string_list_entries_are_dropped() {
        let p = payload(json!({"matched_core_skills": ["rust", 3, null, "go", {"k": 1}]}));
        assert_eq!(p.matched_core_skills, vec!["rust", "go"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let p = payload(json!({"core_match": 10, "confidence": "high"}));
        assert_eq!(p.core_match, 10.0);
    }
}
