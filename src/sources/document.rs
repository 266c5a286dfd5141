//! Locating post records inside a content platform's JSON response.

use serde_json::Value;

use crate::domain::RawContentRecord;
use crate::errors::{BlogError, BlogResult};

/// Keys that commonly hold the post list, tried before any other key.
const COLLECTION_KEYS: &[&str] = &[
    "posts", "items", "data", "entries", "results", "edges", "nodes",
];

/// How deep to search nested response envelopes.
const MAX_DEPTH: usize = 4;

/// Parse a JSON document into raw records.
///
/// Accepts a top-level array, or an object wrapping the array (`{"posts": [...]}`,
/// `{"data": {"publication": {"posts": {"edges": [{"node": {...}}]}}}}`).
/// Elements that are not valid records are skipped with a warning.
pub fn parse_document(text: &str) -> BlogResult<Vec<RawContentRecord>> {
    let value: Value = serde_json::from_str(text)?;

    let items = locate_items(&value, 0)
        .ok_or_else(|| BlogError::ContentParse("No list of posts found in document".to_string()))?;

    let records = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let item = item.get("node").filter(|n| n.is_object()).unwrap_or(item);

            match serde_json::from_value::<RawContentRecord>(item.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed content record");
                    None
                }
            }
        })
        .collect();

    Ok(records)
}

fn locate_items(value: &Value, depth: usize) -> Option<&Vec<Value>> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            let preferred = COLLECTION_KEYS.iter().filter_map(|key| map.get(*key));
            let others = map
                .iter()
                .filter(|(key, _)| !COLLECTION_KEYS.contains(&key.as_str()))
                .map(|(_, v)| v);

            preferred
                .chain(others)
                .filter(|v| v.is_array() || v.is_object())
                .find_map(|v| locate_items(v, depth + 1))
        }
        _ => None,
    }
}
