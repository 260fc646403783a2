use super::ConverterConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &ConverterConfig) -> Result<(), AppError> {
        if config.template.required_key.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "template.required_key cannot be empty",
            ));
        }

        if Directive::from_str(&config.logging.default_level).is_err() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                format!(
                    "logging.default_level '{}' must be a valid tracing directive",
                    config.logging.default_level
                ),
            ));
        }

        Ok(())
    }
}
