//! Untyped documents: source alerts and templates alike.
//!
//! Mapping entries keep insertion order (serde_json `preserve_order`), which
//! fixes both the traversal order of searches and the field order of
//! converted alerts.
pub mod path;
pub mod search;

pub use path::{resolve_path, LookupSpec};
pub use search::{contains_key, count, occurrences, occurrences_in};

use serde_json::{Map, Value};

/// A recursive JSON-like value.
pub type Document = Value;

/// A mapping node of a [`Document`].
pub type Mapping = Map<String, Value>;

/// Short name of a document's variant, used in error messages.
pub fn shape_of(document: &Document) -> &'static str {
    match document {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// String form of a resolved value.
///
/// Strings render without quotes; everything else renders as compact JSON.
pub fn stringify(document: &Document) -> String {
    match document {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Concatenate the string forms of `values` in order.
pub fn concat_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Document>,
{
    values.into_iter().map(stringify).collect()
}
