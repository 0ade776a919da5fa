use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Default location: `<config dir>/postdeck/config.toml`, where the
    /// config dir comes from `dirs::config_dir()` (current dir if unknown).
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("postdeck")
            .join("config.toml")
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(None)
    }

    /// Load from `explicit` if given, otherwise from [`Config::config_path`].
    ///
    /// Only the default location may be absent; an explicit path that
    /// doesn't exist is a read error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Read, parse and validate the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        };
        let parse_error = |source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(read_error)?;
        let config: Config = toml::from_str(&content).map_err(parse_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Reports every problem at once, joined with "; ".
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api;
        let mut problems = Vec::new();

        if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
            problems.push(format!(
                "api.base_url '{}' must start with http:// or https://",
                api.base_url
            ));
        }
        if api.timeout_seconds == 0 {
            problems.push("api.timeout_seconds must be greater than zero".to_string());
        }
        if api.connect_timeout_seconds == 0 {
            problems.push("api.connect_timeout_seconds must be greater than zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError {
                message: problems.join("; "),
            })
        }
    }
}
