//! Total nested-path lookup over JSON documents.
//!
//! Resolution never fails: a missing key, an index past the end, or a
//! mistyped intermediate node short-circuits to None. A literal null at the
//! full path is present, distinct from absent.

use crate::fields::{FieldPath, Segment};
use serde_json::Value;

/// Walk `doc` one segment at a time. `Key` only descends into objects,
/// `Index` only into arrays; anything else is absent.
pub fn resolve<'a>(doc: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut node = doc;
    for segment in &path.0 {
        node = match segment {
            Segment::Key(key) => node.as_object()?.get(key)?,
            Segment::Index(idx) => node.as_array()?.get(*idx)?,
        };
    }
    Some(node)
}
