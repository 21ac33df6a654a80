//! Configuration management for the food dashboard.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the backend URL, request timeout, and log file location.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "FOOD_DASHBOARD_API_URL";

const APP_DIR: &str = "food-dashboard";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the food backend
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Log file path (relative to config dir or absolute)
    pub log_file: String,
    /// Symbol shown before prices
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3333".to_string(),
            timeout_secs: 30,
            log_file: "food-dashboard.log".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/food-dashboard/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    /// `FOOD_DASHBOARD_API_URL` takes precedence over the file's `api_url`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            Self::from_jsonc(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Parse JSONC (JSON with `//` line comments).
    fn from_jsonc(content: &str) -> Result<Self> {
        let json_content: String = content
            .lines()
            .map(strip_line_comment)
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&json_content).with_context(|| "Failed to deserialize config")
    }

    /// Replace `api_url` when an override is present and not blank.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/food-dashboard/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to log file or error
    ///
    /// # Details
    /// If log_file is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_file);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            let config_dir = config_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
            Ok(config_dir.join(APP_DIR).join(&self.log_file))
        }
    }
}

/// Remove a `//` comment unless it sits inside a string literal.
///
/// Escaped quotes are not handled.
fn strip_line_comment(line: &str) -> &str {
    line.match_indices("//")
        .map(|(pos, _)| pos)
        .find(|&pos| line[..pos].matches('"').count() % 2 == 0)
        .map_or(line, |pos| line[..pos].trim_end())
}
