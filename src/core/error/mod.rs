use crate::core::types::ErrorCategory;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const STRUCTURAL_ERROR_CODE: &str = "TPL-STRUCT-001";
pub const MISSING_KEY_ERROR_CODE: &str = "TPL-KEY-001";
pub const CONFIG_ERROR_CODE: &str = "CFG-VAL-001";
pub const IO_ERROR_CODE: &str = "IO_ERROR";

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub context: HashMap<String, String>,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        let code = match category {
            ErrorCategory::StructuralError => STRUCTURAL_ERROR_CODE,
            ErrorCategory::MissingRequiredKey => MISSING_KEY_ERROR_CODE,
            ErrorCategory::ValidationError => CONFIG_ERROR_CODE,
            ErrorCategory::IoError => IO_ERROR_CODE,
        };
        AppError {
            category,
            code: code.to_string(),
            message: message.into(),
            context: HashMap::new(),
            occurred_at: Utc::now(),
            source: None,
        }
    }

    /// Attach the underlying failure; rendered as `Caused by:`.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(anyhow::Error::new(source));
        self
    }

    pub fn with_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    /// True for the two template shape failures that abort a conversion.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self.category,
            ErrorCategory::StructuralError | ErrorCategory::MissingRequiredKey
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            let mut pairs: Vec<_> = self.context.iter().collect();
            pairs.sort();
            write!(f, " (Context: {:?})", pairs)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
