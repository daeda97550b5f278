//! Configuration system for nodequill.
//!
//! This module provides the configuration structure for nodequill with
//! sensible defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use nodequill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, "yaml");
//! assert_eq!(config.default_mode, "regular");
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: "json".to_string(),
//!     ..Config::default()
//! };
//! ```

use crate::file::saver::OutputFormat;
use crate::sort::CompareMode;
use log::warn;
use serde::{Deserialize, Serialize};

/// Configuration for the nodequill application.
///
/// # Fields
///
/// * `output_format` - Output serialization: "yaml" or "json" (default: "yaml")
/// * `default_mode` - Comparison mode for sort columns that name none:
///   "regular", "numeric", "string" or "natural" (default: "regular")
/// * `case_insensitive` - Fold case in string/natural comparisons by default (default: false)
/// * `log_level` - Log filter used when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output serialization format
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Comparison mode for sort columns without an explicit mode
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Fold case in string and natural comparisons
    #[serde(default)]
    pub case_insensitive: bool,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default output format.
fn default_output_format() -> String {
    "yaml".to_string()
}

/// Returns the default comparison mode.
fn default_mode() -> String {
    "regular".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_mode: default_mode(),
            case_insensitive: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/nodequill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("nodequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults
    /// when it can't be read or parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                warn!("Could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// The configured output format; unknown values fall back to YAML.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown output_format '{}' in config, using yaml",
                self.output_format
            );
            OutputFormat::Yaml
        })
    }

    /// The configured default comparison mode; unknown values fall back to
    /// regular comparison.
    pub fn compare_mode(&self) -> CompareMode {
        self.default_mode.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown default_mode '{}' in config, using regular",
                self.default_mode
            );
            CompareMode::Regular
        })
    }
}
