//! Conversion driver: one validated template, one fresh clone per alert.
use crate::core::applier::TemplateApplier;
use crate::core::config::ConverterConfig;
use crate::core::document::{Document, Mapping};
use crate::core::error::AppError;
use crate::core::template::{TemplateValidator, DEFAULT_REQUIRED_KEY};
use crate::core::types::ApplyDepth;
use serde_json::Value;

/// Converts alerts from an arbitrary source into the shape of a template.
///
/// The backing template value may be a mapping or a string naming a file
/// that holds one. It is validated on every conversion, and a successful file
/// load replaces the stored value. Lazy resolution needs `&mut self`; callers
/// sharing a converter across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct Converter {
    mapper: Document,
    required_key: String,
    depth: ApplyDepth,
}

impl Converter {
    pub fn new(mapper: impl Into<Document>) -> Self {
        Converter {
            mapper: mapper.into(),
            required_key: DEFAULT_REQUIRED_KEY.to_string(),
            depth: ApplyDepth::default(),
        }
    }

    /// Build a converter from loaded configuration. The template path, when
    /// present, is stored as-is and resolved on first use.
    pub fn from_config(config: &ConverterConfig) -> Self {
        let mapper = config
            .template
            .path
            .as_ref()
            .map(|path| Value::String(path.to_string_lossy().into_owned()))
            .unwrap_or(Value::Null);
        Converter::new(mapper)
            .with_required_key(config.template.required_key.clone())
            .with_depth(config.template.depth)
    }

    pub fn with_required_key(mut self, required_key: impl Into<String>) -> Self {
        self.required_key = required_key.into();
        self
    }

    pub fn with_depth(mut self, depth: ApplyDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn required_key(&self) -> &str {
        &self.required_key
    }

    /// Replace the backing template value. Validation happens on next read.
    pub fn set_mapper(&mut self, mapper: impl Into<Document>) {
        self.mapper = mapper.into();
    }

    /// Validated template mapping.
    pub fn mapping(&mut self) -> Result<&Mapping, AppError> {
        TemplateValidator::validate(&mut self.mapper, &self.required_key)
    }

    /// Convert one alert, or every alert of a sequence.
    ///
    /// A sequence input yields a sequence of the same length and order.
    pub fn convert(&mut self, input: &Document) -> Result<Document, AppError> {
        match input {
            Value::Array(alerts) => self.convert_batch(alerts).map(Value::Array),
            alert => self.convert_one(alert),
        }
    }

    pub fn convert_one(&mut self, alert: &Document) -> Result<Document, AppError> {
        let depth = self.depth;
        let template = self.mapping()?;
        tracing::debug!(fields = template.len(), "converting alert");
        Ok(Value::Object(apply_to_clone(template, alert, depth)))
    }

    /// Convert each alert against its own deep copy of the template.
    pub fn convert_batch(&mut self, alerts: &[Document]) -> Result<Vec<Document>, AppError> {
        let depth = self.depth;
        let template = self.mapping()?;
        tracing::debug!(batch_size = alerts.len(), "converting alert batch");
        Ok(alerts
            .iter()
            .map(|alert| Value::Object(apply_to_clone(template, alert, depth)))
            .collect())
    }
}

fn apply_to_clone(template: &Mapping, alert: &Document, depth: ApplyDepth) -> Mapping {
    let mut converted = template.clone();
    TemplateApplier::new(depth).apply(&mut converted, alert);
    converted
}
