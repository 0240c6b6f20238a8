//! Input configuration (segment list delimiters).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default characters separating segments in free-text input.
pub const DEFAULT_DELIMITERS: &[char] = &[',', '.', '/', '|'];

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No segment delimiters configured")]
    NoDelimiters,

    #[error("Invalid delimiter {0:?}: {1}")]
    InvalidDelimiter(char, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonologyConfig {
    #[serde(default)]
    pub input: InputConfig,
}

/// How free-text segment lists are split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Characters that separate segments. Surrounding whitespace is trimmed.
    pub delimiters: Vec<char>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

impl PhonologyConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.delimiters.is_empty() {
            return Err(ConfigError::NoDelimiters);
        }
        for (i, &c) in self.input.delimiters.iter().enumerate() {
            if self.input.delimiters[..i].contains(&c) {
                return Err(ConfigError::InvalidDelimiter(c, "listed more than once".to_string()));
            }
        }
        Ok(())
    }
}
