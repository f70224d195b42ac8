//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Catalog query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Default page size for the articles listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How many articles the empty-query search fallback returns
    #[serde(default = "default_recommended_limit")]
    pub recommended_limit: usize,
}

fn default_page_size() -> usize {
    5
}

fn default_recommended_limit() -> usize {
    3
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recommended_limit: default_recommended_limit(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding article documents
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Path to the tools listing
    #[serde(default = "default_tools_path")]
    pub tools_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("./content/articles")
}

fn default_tools_path() -> PathBuf {
    PathBuf::from("./data/tools.yaml")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            tools_path: default_tools_path(),
            log_level: default_log_level(),
            catalog: CatalogConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.catalog.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "Catalog page size must be greater than 0".to_string(),
            ));
        }

        if self.catalog.recommended_limit == 0 {
            return Err(ConfigError::ValidationError(
                "Recommended limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
