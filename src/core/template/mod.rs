//! Template validation.
//!
//! A template is either supplied as a mapping or as a string naming a file
//! that holds one. Validation runs on every read so the backing value may be
//! swapped after the converter is built.
use crate::core::document::{shape_of, Document, Mapping};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::utils::serialization::FileUtils;
use serde_json::Value;
use std::path::PathBuf;

/// Reserved top-level key every template must carry.
pub const DEFAULT_REQUIRED_KEY: &str = "labels";

pub struct TemplateValidator;

impl TemplateValidator {
    /// Validate `candidate` in place and borrow the resulting mapping.
    ///
    /// A string naming a readable file is replaced by the parsed document.
    /// Load failures are not errors; the original value is type-checked as-is.
    pub fn validate<'a>(
        candidate: &'a mut Document,
        required_key: &str,
    ) -> Result<&'a Mapping, AppError> {
        Self::resolve_file(candidate);

        let shape = shape_of(candidate);
        match candidate {
            Value::Object(map) => {
                if !map.contains_key(required_key) {
                    return Err(AppError::new(
                        ErrorCategory::MissingRequiredKey,
                        format!("mapper must contain top-level key '{}'", required_key),
                    )
                    .with_context("required_key", required_key));
                }
                Ok(map)
            }
            other => Err(AppError::new(
                ErrorCategory::StructuralError,
                format!("mapper must be a mapping {} ==> {}", other, shape),
            )
            .with_context("shape", shape)),
        }
    }

    fn resolve_file(candidate: &mut Document) {
        let Value::String(location) = candidate else {
            return;
        };
        let path = PathBuf::from(location.as_str());
        if !path.is_file() {
            return;
        }
        match FileUtils::load_document(&path) {
            Ok(document) => {
                tracing::debug!(path = %path.display(), "loaded mapper from file");
                *candidate = document;
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "mapper file not usable");
            }
        }
    }
}
