use crate::core::template::DEFAULT_REQUIRED_KEY;
use crate::core::types::ApplyDepth;
use crate::logging::config::LoggingConfig;
use serde::Deserialize;
use std::path::PathBuf;

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

/// Converter configuration loaded from alert-convert.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConverterConfig {
    /// Template configuration
    #[serde(default)]
    pub template: TemplateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Template configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// File holding the mapper document (JSON, or YAML by extension)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Reserved top-level key the mapper must contain
    #[serde(default = "default_required_key")]
    pub required_key: String,

    /// How deep field groups are resolved
    #[serde(default)]
    pub depth: ApplyDepth,
}

fn default_required_key() -> String {
    DEFAULT_REQUIRED_KEY.to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        TemplateConfig {
            path: None,
            required_key: default_required_key(),
            depth: ApplyDepth::default(),
        }
    }
}
