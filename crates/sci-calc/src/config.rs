//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid YAML for [`EngineConfig`]
    #[error("Invalid config: {0}")]
    Parse(String),

    /// Config parsed but a value is out of range
    #[error("Invalid config value: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

/// Tunables for the calculator engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay before an error message reverts to "0" (milliseconds)
    pub error_revert_ms: u64,
    /// Delay before a confirmation message restores the display (milliseconds)
    pub message_revert_ms: u64,
    /// Characters that fit on the display before long numbers go scientific
    pub display_width: usize,
    /// Text shown while powered off
    pub off_text: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_revert_ms: 2000,
            message_revert_ms: 1000,
            display_width: 12,
            off_text: "Calculator Off".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error revert delay
    #[must_use]
    pub const fn with_error_revert_ms(mut self, ms: u64) -> Self {
        self.error_revert_ms = ms;
        self
    }

    /// Set the message revert delay
    #[must_use]
    pub const fn with_message_revert_ms(mut self, ms: u64) -> Self {
        self.message_revert_ms = ms;
        self
    }

    /// Set the display width
    #[must_use]
    pub const fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = width;
        self
    }

    /// Set the powered-off text
    #[must_use]
    pub fn with_off_text(mut self, text: impl Into<String>) -> Self {
        self.off_text = text.into();
        self
    }

    /// Error revert delay as a [`Duration`]
    #[must_use]
    pub const fn error_revert(&self) -> Duration {
        Duration::from_millis(self.error_revert_ms)
    }

    /// Message revert delay as a [`Duration`]
    #[must_use]
    pub const fn message_revert(&self) -> Duration {
        Duration::from_millis(self.message_revert_ms)
    }

    /// Rejects values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width == 0 {
            return Err(ConfigError::Invalid {
                message: "display_width must be at least 1".to_string(),
            });
        }
        if self.off_text.is_empty() {
            return Err(ConfigError::Invalid {
                message: "off_text must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates YAML; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serializes the configuration as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.error_revert(), Duration::from_millis(2000));
        assert_eq!(config.message_revert(), Duration::from_millis(1000));
        assert_eq!(config.display_width, 12);
        assert_eq!(config.off_text, "Calculator Off");
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_error_revert_ms(50)
            .with_message_revert_ms(25)
            .with_display_width(8)
            .with_off_text("OFF");
        assert_eq!(config.error_revert_ms, 50);
        assert_eq!(config.message_revert_ms, 25);
        assert_eq!(config.display_width, 8);
        assert_eq!(config.off_text, "OFF");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EngineConfig::from_yaml_str("display_width: 16\n").unwrap();
        assert_eq!(config.display_width, 16);
        assert_eq!(config.error_revert_ms, 2000);
    }

    #[test]
    fn test_from_yaml_rejects_zero_width() {
        let err = EngineConfig::from_yaml_str("display_width: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        let err = EngineConfig::from_yaml_str("display_width: [wide]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = EngineConfig::new().with_display_width(20);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(EngineConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error_revert_ms: 10").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.error_revert_ms, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("I/O"));
    }
}
