use super::{types::Config, ConfigError};
use crate::converter::Quality;

/// Validate configuration
/// Currently validates:
/// - Quality is within 0-10
/// - Engine name is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.conversion.quality > Quality::MAX {
        return Err(ConfigError::ValidationError(format!(
            "conversion.quality must be between 0 and {}, got {}",
            Quality::MAX,
            config.conversion.quality
        )));
    }

    if config.engine.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "engine.name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
