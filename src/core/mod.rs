pub mod applier;
pub mod config;
pub mod converter;
pub mod document;
pub mod error;
pub mod template;
pub mod types;

pub use applier::TemplateApplier;
pub use config::{ConfigLoader, ConfigValidator, ConverterConfig, TemplateConfig};
pub use converter::Converter;
pub use document::{Document, LookupSpec, Mapping};
pub use error::AppError;
pub use template::{TemplateValidator, DEFAULT_REQUIRED_KEY};
pub use types::{ApplyDepth, ErrorCategory};
