//! JSON extraction from oracle output that is expected, but not guaranteed, to be pure JSON.
//!
//! Two steps: parse the whole text, then parse the greedy `{ … }` span (first `{` to
//! last `}`, across newlines). The greedy span is not nesting-aware: two separate
//! objects in one response are captured together and fail to parse.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

static GREEDY_OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid JSON object regex"));

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in AI output")]
    NoJsonFound,
}

/// Recovers a single JSON object from free text.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(text) {
        return Ok(object);
    }

    let span = GREEDY_OBJECT_REGEX
        .find(text)
        .ok_or(ExtractError::NoJsonFound)?;

    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(ExtractError::NoJsonFound),
    }
}
