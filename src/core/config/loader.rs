use super::ConverterConfig;
use crate::core::error::AppError;
use crate::core::types::{ApplyDepth, ErrorCategory};
use crate::logging::config::ConsoleOutput;
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up by [`ConfigLoader::load_from_dir`].
pub const CONFIG_FILE_NAME: &str = "alert-convert.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from `dir/alert-convert.toml`.
    /// Environment variables override config file values.
    /// A missing file yields defaults plus env overrides.
    pub fn load_from_dir(dir: &Path) -> Result<ConverterConfig, AppError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let mut config = Self::load_from_file(&config_path)?.unwrap_or_default();

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// A relative `template.path` is resolved against the file's directory
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<ConverterConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}", path.display()),
            )
            .with_source(e)
        })?;

        let mut config: ConverterConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("Failed to parse config file {}", path.display()),
            )
            .with_source(e)
        })?;

        if let (Some(template), Some(base)) = (config.template.path.as_mut(), path.parent()) {
            if template.is_relative() {
                *template = base.join(&*template);
            }
        }

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Unparseable values are ignored
    fn apply_env_overrides(config: &mut ConverterConfig) {
        if let Ok(template) = env::var("ALERT_CONVERT_TEMPLATE") {
            config.template.path = Some(PathBuf::from(template));
        }

        if let Ok(required_key) = env::var("ALERT_CONVERT_REQUIRED_KEY") {
            config.template.required_key = required_key;
        }

        if let Ok(depth_str) = env::var("ALERT_CONVERT_DEPTH") {
            if let Ok(depth) = depth_str.parse::<ApplyDepth>() {
                config.template.depth = depth;
            }
        }

        if let Ok(level) = env::var("ALERT_CONVERT_LOG_LEVEL") {
            config.logging.default_level = level;
        }

        if let Ok(output_str) = env::var("ALERT_CONVERT_CONSOLE_OUTPUT") {
            if let Ok(output) = output_str.parse::<ConsoleOutput>() {
                config.logging.console_output = output;
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "ALERT_CONVERT_TEMPLATE - Override mapper file path",
            "ALERT_CONVERT_REQUIRED_KEY - Override reserved top-level key (default: labels)",
            "ALERT_CONVERT_DEPTH - Override field group depth (shallow/recursive)",
            "ALERT_CONVERT_LOG_LEVEL - Override default tracing level (default: info)",
            "ALERT_CONVERT_CONSOLE_OUTPUT - Override console sink (stdout/stderr/none)",
        ]
    }
}
