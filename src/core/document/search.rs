use serde_json::Value;

/// Collect every value stored under `key`, at any depth, in pre-order.
///
/// Mapping entries are visited in insertion order. A matched value is
/// collected before anything nested inside it. Sequence elements are visited
/// in index order; scalars are leaves.
pub fn occurrences<'a>(document: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut found = Vec::new();
    collect(document, key, &mut found);
    found
}

/// Search a compound scope, element by element, as one document.
pub fn occurrences_in<'a>(scope: &[&'a Value], key: &str) -> Vec<&'a Value> {
    let mut found = Vec::new();
    for &document in scope {
        collect(document, key, &mut found);
    }
    found
}

/// Number of occurrences of `key` in `document`.
pub fn count(document: &Value, key: &str) -> usize {
    occurrences(document, key).len()
}

/// Whether `key` occurs anywhere in `document`. Stops at the first match.
pub fn contains_key(document: &Value, key: &str) -> bool {
    match document {
        Value::Object(map) => map
            .iter()
            .any(|(name, value)| name == key || contains_key(value, key)),
        Value::Array(items) => items.iter().any(|item| contains_key(item, key)),
        _ => false,
    }
}

fn collect<'a>(document: &'a Value, key: &str, found: &mut Vec<&'a Value>) {
    match document {
        Value::Object(map) => {
            for (name, value) in map {
                if name == key {
                    found.push(value);
                }
                if value.is_object() || value.is_array() {
                    collect(value, key, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, key, found);
            }
        }
        _ => {}
    }
}
