//! Response Normalization
//!
//! Converts raw model text into a stable, typed result the rest of the
//! system can render. Normalization is a total function: every input,
//! including empty text and binary garbage, produces a `NormalizedResult`.
//! Extraction failure resolves to a fallback result, never an error.
//!
//! Two extraction strategies, selected by the shape's declared format:
//!
//! - `sections`: marker-based section extraction for narrative replies
//! - `json`: fenced/brace-span JSON extraction for object replies
//!
//! Both are small pure functions, unit-tested in isolation from any
//! network or storage dependency.

mod json;
mod sections;
pub mod shape;

pub use shape::{FieldSpec, Shape, ShapeFormat};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::constants::normalize::{FALLBACK_EXCERPT_CHARS, TRUNCATION_MARKER};

// =============================================================================
// Normalized Result
// =============================================================================

/// Where a result's field values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Fields were sourced from the model's parsed output
    Structured,
    /// Extraction failed; only the primary field carries a raw excerpt
    Fallback,
}

/// One value per shape field, in shape order.
///
/// Serializes as a JSON object whose keys are exactly the shape's keys.
/// Field names outside the shape can never appear: values are stored
/// positionally against the shape's own field list.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    provenance: Provenance,
    fields: Vec<(&'static str, String)>,
}

impl NormalizedResult {
    fn structured(shape: &Shape, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), shape.fields.len());
        Self {
            provenance: Provenance::Structured,
            fields: shape.keys().zip(values).collect(),
        }
    }

    fn fallback(shape: &Shape, raw: &str) -> Self {
        let mut values = vec![String::new(); shape.fields.len()];
        if let Some(primary) = values.first_mut() {
            *primary = fallback_excerpt(raw);
        }
        Self {
            provenance: Provenance::Fallback,
            fields: shape.keys().zip(values).collect(),
        }
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    /// Value for a shape key, if the key belongs to this result's shape
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// (key, value) pairs in shape order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Serialize for NormalizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Normalization Entry Points
// =============================================================================

/// Normalize a raw model reply against a shape. Total; never fails.
pub fn normalize(raw: &str, shape: &Shape) -> NormalizedResult {
    match shape.format {
        ShapeFormat::Sections => match sections::extract(raw, shape.fields) {
            Some(values) => NormalizedResult::structured(shape, values),
            None => NormalizedResult::fallback(shape, raw),
        },
        ShapeFormat::Json => match json::extract_object(raw) {
            Some(object) => {
                NormalizedResult::structured(shape, json::project(&object, shape.fields))
            }
            None => NormalizedResult::fallback(shape, raw),
        },
    }
}

/// Extract a named array of objects from a raw reply, or `None` when the
/// reply holds nothing parseable and the caller should fall back to its
/// own data. A parsed object without the key yields an empty vec.
pub fn normalize_keyed_array(raw: &str, key: &str) -> Option<Vec<Value>> {
    json::extract_keyed_array(raw, key)
}

/// Bounded prefix of the raw text for fallback results. Measured in
/// characters so the bound never splits a UTF-8 sequence; the truncation
/// marker is appended only when the text exceeded the bound.
fn fallback_excerpt(raw: &str) -> String {
    match raw.char_indices().nth(FALLBACK_EXCERPT_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &raw[..byte_idx], TRUNCATION_MARKER),
        None => raw.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
