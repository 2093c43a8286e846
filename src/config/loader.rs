use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const MIN_TICK_RATE_MS: u64 = 16;
const MAX_TICK_RATE_MS: u64 = 1000;

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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/feathers-splash/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("feathers-splash").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&Self::config_path())
    }

    /// Like `load_from`, but a missing file yields `Config::default()`.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Loads configuration from `path`, parsing it as TOML and validating it.
    ///
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts are non-zero
    /// - The tick rate keeps the animation between ~60 fps and 1 fps
    /// - The configured URL, if any, is http(s)
    /// - The log level is a known level name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loader.timeout_seconds == 0 || self.loader.connect_timeout_seconds == 0 {
            return Err(invalid("Loader timeouts must be greater than zero"));
        }

        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(invalid(format!(
                "ui.tick_rate_ms must be between {} and {}, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
            )));
        }

        if let Some(url) = &self.loader.url {
            validate_url(url)?;
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Check that `url` is something the HTTP loader can fetch.
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    let has_host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());

    if has_host {
        Ok(())
    } else {
        Err(invalid(format!(
            "URL '{}' must start with http:// or https://",
            url
        )))
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
