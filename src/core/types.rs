use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Template is not a mapping after optional file resolution.
    StructuralError,
    /// Template mapping lacks the reserved top-level key.
    MissingRequiredKey,
    /// Configuration file or values are invalid.
    ValidationError,
    IoError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How far below the top level the applier resolves lookup specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyDepth {
    /// Only the direct entries of each top-level field group are resolved.
    /// Nested mappings inside a group pass through untouched.
    #[default]
    Shallow,
    /// Nested mappings inside a field group are walked and every leaf
    /// lookup specification is resolved.
    Recursive,
}

impl FromStr for ApplyDepth {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "shallow" => Ok(ApplyDepth::Shallow),
            "recursive" => Ok(ApplyDepth::Recursive),
            _ => Err(format!(
                "invalid template.depth '{}'; supported values are shallow, recursive",
                value
            )),
        }
    }
}
