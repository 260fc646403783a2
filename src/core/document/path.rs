use super::search::{occurrences, occurrences_in};
use serde_json::Value;

/// How a template field names the source value it wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupSpec {
    /// Search the whole alert for one key name.
    Key(String),
    /// Narrow the search left to right, each key scoped to the previous matches.
    Path(Vec<String>),
}

impl LookupSpec {
    /// Interpret a template field value as a lookup specification.
    ///
    /// Strings become keys and non-empty sequences of strings become paths.
    /// Anything else is not a lookup and is left alone by the applier.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(key) => Some(LookupSpec::Key(key.clone())),
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(LookupSpec::Path),
            _ => None,
        }
    }

    /// Every value this lookup resolves to in `document`, or `None` when nothing matches.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<Vec<&'a Value>> {
        match self {
            LookupSpec::Key(key) => {
                let found = occurrences(document, key);
                (!found.is_empty()).then_some(found)
            }
            LookupSpec::Path(path) => resolve_path(document, path),
        }
    }
}

/// Resolve a key path by successive narrowing.
///
/// Each step searches only inside the values matched by the previous step.
/// The matches of the final step are the result. A step with no match fails
/// the whole path; an empty path never matches.
pub fn resolve_path<'a, S: AsRef<str>>(document: &'a Value, path: &[S]) -> Option<Vec<&'a Value>> {
    let (first, rest) = path.split_first()?;
    let first: &str = first.as_ref();
    let mut scope = occurrences(document, first);
    if scope.is_empty() {
        tracing::trace!(step = first, "path step has no match");
        return None;
    }
    for key in rest {
        let key: &str = key.as_ref();
        scope = occurrences_in(&scope, key);
        if scope.is_empty() {
            tracing::trace!(step = key, "path step has no match");
            return None;
        }
    }
    Some(scope)
}
