//! Embedded-JSON Extraction
//!
//! Pulls a structured object out of a free-text model reply. Two locators,
//! tried in order:
//!
//! 1. A fenced block explicitly labeled as JSON (```json ... ```)
//! 2. The largest brace-delimited span: first `{` to last `}`
//!
//! Whatever the locator finds must parse as a JSON object; anything else
//! is reported as extraction failure so the caller can fall back.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::FieldSpec;

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fenced block pattern"));

/// Locate the candidate JSON span inside a raw reply
fn json_span(raw: &str) -> Option<&str> {
    if let Some(captures) = FENCED_JSON.captures(raw) {
        return captures.get(1).map(|m| m.as_str());
    }
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Extract and parse a JSON object from a raw reply.
///
/// Returns `None` when no brace span exists, the span is malformed, or
/// the parsed value is not an object.
pub(crate) fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    let span = json_span(raw)?;
    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Project a parsed object onto the declared fields.
///
/// Fields absent from the object are empty; object keys outside the
/// declared fields are dropped. String values pass through verbatim,
/// `null` maps to empty, anything else renders as compact JSON.
pub(crate) fn project(object: &Map<String, Value>, fields: &[FieldSpec]) -> Vec<String> {
    fields
        .iter()
        .map(|field| object.get(field.key).map(coerce).unwrap_or_default())
        .collect()
}

/// Extract a named array of objects from a raw reply.
///
/// `Some(vec)` means an object parsed; a missing key yields an empty vec.
/// `None` means nothing parseable was found and the caller should fall
/// back to its own data.
pub(crate) fn extract_keyed_array(raw: &str, key: &str) -> Option<Vec<Value>> {
    let object = extract_object(raw)?;
    match object.get(key) {
        Some(Value::Array(items)) => Some(items.clone()),
        _ => Some(Vec::new()),
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
