use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use super::HttpConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

impl HttpConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quotedeck/client.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quotedeck").join("client.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `HttpConfig::default()`; an existing file is
    /// parsed as TOML and validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration: the base URL must be set and parseable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation {
                message: "base_url must be set".to_string(),
            });
        }

        if let Err(err) = Url::parse(&self.base_url) {
            return Err(ConfigError::Validation {
                message: format!("base_url '{}' is not a valid URL: {}", self.base_url, err),
            });
        }

        Ok(())
    }
}
