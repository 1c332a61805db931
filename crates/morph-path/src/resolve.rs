//! Path traversal over nested config values
//!
//! The walk keeps a cursor into the root value and consumes one segment per
//! step. Each step dispatches on the kind of value under the cursor: mappings
//! take field names, sequences take `[index]` or `[field=value]`, and scalars
//! end the walk with an error if segments remain.

use serde_json::{Map, Value};

use crate::error::{PathError, Result, ShapeMismatch};
use crate::segment::{PathExpr, Segment, render_location};

/// Resolve `path` against `root`, returning a reference into `root`.
///
/// # Examples
///
/// ```
/// use morph_path::resolve;
/// use serde_json::json;
///
/// let value = json!({"rows": [{"id": "1", "v": "x"}, {"id": "2", "v": "y"}]});
/// assert_eq!(resolve(&value, "rows[id=2].v").unwrap(), &json!("y"));
/// assert_eq!(resolve(&value, &["rows", "[0]", "v"]).unwrap(), &json!("x"));
/// ```
pub fn resolve<'v, P: PathExpr + ?Sized>(root: &'v Value, path: &P) -> Result<&'v Value> {
    let segments = path.to_segments()?;
    resolve_segments(root, &segments)
}

/// Walk an already tokenized path.
pub fn resolve_segments<'v>(root: &'v Value, segments: &[Segment]) -> Result<&'v Value> {
    if segments.is_empty() {
        return Err(PathError::invalid_path("path has no segments"));
    }

    let mut cursor = root;
    for (depth, segment) in segments.iter().enumerate() {
        cursor = step(cursor, segment, &segments[..depth])?;
    }

    tracing::trace!(path = %render_location(segments), "Resolved path");
    Ok(cursor)
}

fn step<'v>(cursor: &'v Value, segment: &Segment, consumed: &[Segment]) -> Result<&'v Value> {
    match cursor {
        Value::Object(map) => step_mapping(map, segment, consumed),
        Value::Array(items) => step_sequence(items, segment, consumed),
        scalar => Err(PathError::PathTraversal {
            segment: segment.to_string(),
            at: render_location(consumed),
            found: kind_name(scalar),
        }),
    }
}

fn step_mapping<'v>(
    map: &'v Map<String, Value>,
    segment: &Segment,
    consumed: &[Segment],
) -> Result<&'v Value> {
    let Segment::Field(key) = segment else {
        return Err(PathError::PathShape {
            segment: segment.to_string(),
            at: render_location(consumed),
            mismatch: ShapeMismatch::BracketInMapping,
        });
    };

    map.get(key).ok_or_else(|| PathError::PathNotFound {
        key: key.clone(),
        at: render_location(consumed),
    })
}

fn step_sequence<'v>(
    items: &'v [Value],
    segment: &Segment,
    consumed: &[Segment],
) -> Result<&'v Value> {
    match segment {
        Segment::Field(_) => Err(PathError::PathShape {
            segment: segment.to_string(),
            at: render_location(consumed),
            mismatch: ShapeMismatch::BareInSequence,
        }),
        Segment::Index(index) => items.get(*index).ok_or_else(|| PathError::IndexOutOfRange {
            index: index.to_string(),
            len: items.len(),
            at: render_location(consumed),
        }),
        Segment::IndexOverflow(digits) => Err(PathError::IndexOutOfRange {
            index: digits.clone(),
            len: items.len(),
            at: render_location(consumed),
        }),
        Segment::Predicate { field, value } => items
            .iter()
            .find(|item| matches_predicate(item, field, value))
            .ok_or_else(|| PathError::PredicateNoMatch {
                predicate: format!("{field}={value}"),
                at: render_location(consumed),
            }),
        Segment::Malformed { raw, reason } => Err(PathError::InvalidBracketExpression {
            expression: format!("[{raw}]"),
            reason: *reason,
            at: render_location(consumed),
        }),
    }
}

/// String equality only: `{"id": 2}` does not match `id=2`.
fn matches_predicate(item: &Value, field: &str, value: &str) -> bool {
    item.as_object()
        .and_then(|map| map.get(field))
        .and_then(Value::as_str)
        .is_some_and(|found| found == value)
}

/// Human-readable name of a value's kind
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
