//! Tool configuration.
//!
//! This module handles loading, validating, and saving the `ukmap` tool's own
//! preferences (export defaults) in TOML format with platform-specific
//! directory resolution. It has nothing to do with the map data itself.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_VARIABLE_NAME};
use crate::wire::{is_js_identifier, ExportOptions, WireFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Export defaults used when the CLI flags don't say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format ("js" or "json")
    #[serde(default)]
    pub format: WireFormat,
    /// Global variable name assigned in JS output
    #[serde(default = "default_variable_name")]
    pub variable_name: String,
    /// Indent exported data
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_variable_name() -> String {
    DEFAULT_VARIABLE_NAME.to_string()
}

/// Pretty output by default, matching the hand-written data file
fn default_pretty() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: WireFormat::default(),
            variable_name: default_variable_name(),
            pretty: default_pretty(),
        }
    }
}

impl ExportConfig {
    /// Converts to export options.
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            format: self.format,
            variable_name: self.variable_name.clone(),
            pretty: self.pretty,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ukmap/config.toml`
/// - macOS: `~/Library/Application Support/ukmap/config.toml`
/// - Windows: `%APPDATA%\ukmap\config.toml`
///
/// `UKMAP_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `UKMAP_CONFIG_DIR` when set, otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "Saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `export.variable_name` is a plain JavaScript identifier
    pub fn validate(&self) -> Result<()> {
        if !is_js_identifier(&self.export.variable_name) {
            anyhow::bail!(
                "Invalid export.variable_name '{}': must be a JavaScript identifier \
                 (letters, digits, '_' or '$', not starting with a digit)",
                self.export.variable_name
            );
        }
        Ok(())
    }
}
