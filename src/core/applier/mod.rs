//! Rewrites a cloned template in place with values found in a source alert.
//!
//! Only entries of top-level field groups are resolved by default: with
//! [`ApplyDepth::Shallow`] a mapping nested inside a group passes through
//! untouched. [`ApplyDepth::Recursive`] walks nested mappings as well.
//! Top-level values that are not mappings are never touched.
use crate::core::document::{concat_values, Document, LookupSpec, Mapping};
use crate::core::types::ApplyDepth;
use serde_json::Value;

pub struct TemplateApplier {
    depth: ApplyDepth,
}

impl Default for TemplateApplier {
    fn default() -> Self {
        Self::new(ApplyDepth::default())
    }
}

impl TemplateApplier {
    pub fn new(depth: ApplyDepth) -> Self {
        TemplateApplier { depth }
    }

    pub fn depth(&self) -> ApplyDepth {
        self.depth
    }

    /// Resolve every field group of `template` against `alert`.
    ///
    /// Fields without a match keep their lookup specification as a visible placeholder.
    pub fn apply<'t>(&self, template: &'t mut Mapping, alert: &Document) -> &'t mut Mapping {
        for (group_name, group) in template.iter_mut() {
            if let Value::Object(fields) = group {
                self.apply_group(group_name, fields, alert);
            }
        }
        template
    }

    fn apply_group(&self, group_name: &str, fields: &mut Mapping, alert: &Document) {
        for (field_name, spec) in fields.iter_mut() {
            if let Value::Object(nested) = spec {
                if self.depth == ApplyDepth::Recursive {
                    let nested_name = format!("{}.{}", group_name, field_name);
                    self.apply_group(&nested_name, nested, alert);
                }
                continue;
            }
            match resolve_field(spec, alert) {
                Some(resolved) => *spec = Value::String(resolved),
                None => {
                    tracing::debug!(
                        group = group_name,
                        field = field_name.as_str(),
                        "field left unresolved"
                    );
                }
            }
        }
    }
}

/// Resolved string for one lookup specification, or `None` when it has no match.
pub fn resolve_field(spec: &Value, alert: &Document) -> Option<String> {
    let lookup = LookupSpec::from_value(spec)?;
    lookup.resolve(alert).map(concat_values)
}
