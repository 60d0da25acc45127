//! Store configuration management
//!
//! Handles loading the merge threshold from environment variables, TOML files
//! and defaults.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the merge threshold.
pub const ENV_THRESHOLD: &str = "POLYINTERP_THRESHOLD";

/// Environment variable selecting strict threshold validation.
pub const ENV_STRICT_THRESHOLD: &str = "POLYINTERP_STRICT_THRESHOLD";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold is negative or not finite.
    #[error("Invalid threshold: {0}. Must be finite and non-negative")]
    InvalidThreshold(f64),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Point store configuration structure
///
/// # Example
///
/// ```
/// use polyinterp_store::StoreConfig;
///
/// let config = StoreConfig::from_toml_str("threshold = 0.05").unwrap();
/// assert_eq!(config.threshold, 0.05);
/// assert!(!config.strict_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Minimum abscissa separation; closer samples merge at their mean
    pub threshold: f64,
    /// Reject an invalid threshold instead of falling back to zero
    pub strict_threshold: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            strict_threshold: false,
        }
    }
}

impl StoreConfig {
    /// Create a new StoreConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style threshold override.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder-style strictness override.
    pub fn with_strict_threshold(mut self, strict: bool) -> Self {
        self.strict_threshold = strict;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults. Used by [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(&lookup)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// Parsing does not validate the threshold; see [`StoreConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    fn apply_lookup<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_THRESHOLD) {
            self.threshold = raw.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={:?} is not a number", ENV_THRESHOLD, raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_STRICT_THRESHOLD) {
            self.strict_threshold = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::EnvError(format!(
                        "{}={:?} is not a boolean",
                        ENV_STRICT_THRESHOLD, raw
                    )))
                }
            };
        }

        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
///
/// Validation is deferred to the consumer so that a non-strict configuration
/// can still fall back to the default threshold.
pub fn build_config(config_file: Option<&Path>) -> Result<StoreConfig, ConfigError> {
    build_config_with(config_file, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(config_file: Option<&Path>, lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_file {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };

    config.apply_lookup(&lookup)?;

    Ok(config)
}
