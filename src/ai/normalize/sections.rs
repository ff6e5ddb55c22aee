//! Delimiter-Based Section Extraction
//!
//! Locates labeled sections ("Overview: ...") in free-form model text.
//! Markers are recognized in declared order only: the scan cursor advances
//! past each recognized marker, so a later field's marker occurring inside
//! an earlier field's content is treated as content, not as a marker.
//! First occurrence wins.

use super::FieldSpec;

/// Extract one value per declared field from free-form text.
///
/// A field whose marker is missing gets an empty string. Returns `None`
/// when no marker was found at all, signaling the caller to fall back.
pub(crate) fn extract(raw: &str, fields: &[FieldSpec]) -> Option<Vec<String>> {
    // First pass: locate markers left to right, advancing a cursor so
    // fields can never be matched out of declared order.
    let mut spans: Vec<Option<(usize, usize)>> = Vec::with_capacity(fields.len());
    let mut cursor = 0usize;

    for field in fields {
        let marker = format!("{}:", field.label);
        match raw[cursor..].find(&marker) {
            Some(rel) => {
                let marker_start = cursor + rel;
                let value_start = marker_start + marker.len();
                spans.push(Some((marker_start, value_start)));
                cursor = value_start;
            }
            None => spans.push(None),
        }
    }

    if spans.iter().all(Option::is_none) {
        return None;
    }

    // Second pass: each found field's value runs to the start of the next
    // found field's marker, or the end of text for the last one.
    let mut values = vec![String::new(); fields.len()];
    for (i, span) in spans.iter().enumerate() {
        if let Some((_, value_start)) = span {
            let end = spans[i + 1..]
                .iter()
                .flatten()
                .map(|(marker_start, _)| *marker_start)
                .next()
                .unwrap_or(raw.len());
            values[i] = raw[*value_start..end].trim().to_string();
        }
    }

    Some(values)
}
