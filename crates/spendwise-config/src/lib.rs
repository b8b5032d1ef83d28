//! Configuration management for spendwise
//!
//! This module handles loading and validation of the client
//! configuration from YAML files. Every field has a default, so a
//! missing config file is not an error for callers that opt into
//! [`Config::load_or_default`].

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;
pub use error::ConfigResult;

// ==================== Configuration Types ====================

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the SpendWise backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the session file
    #[serde(default = "default_session_dir")]
    pub path: PathBuf,
    /// Session file name
    #[serde(default = "default_session_file")]
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_dir(),
            file: default_session_file(),
        }
    }
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_session_file() -> String {
    "session.json".to_string()
}

/// Notification display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum number of notifications shown at once
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
        }
    }
}

fn default_max_visible() -> usize {
    2
}

/// Record table display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum description length before truncation
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
        }
    }
}

fn default_description_limit() -> usize {
    50
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session storage settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::IoError)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: PathBuf) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must not be empty".to_string(),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if self.notifications.max_visible == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notifications.max_visible".to_string(),
                reason: "At least one notification must be visible".to_string(),
            });
        }

        if self.display.description_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "display.description_limit".to_string(),
                reason: "Description limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the base URL without a trailing slash
    pub fn api_base(&self) -> String {
        self.api.base_url.trim_end_matches('/').to_string()
    }

    /// Get the full path to the session file
    pub fn session_path(&self) -> PathBuf {
        self.session.path.join(&self.session.file)
    }
}

// ==================== Tests ====================
