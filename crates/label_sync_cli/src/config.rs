//! Configuration management for the label-sync CLI.
//!
//! The configuration file is optional. It is stored in TOML format and is
//! loaded from the path given with `--config`, or from `label-sync.toml` in
//! the current directory when that file exists. Values given on the command
//! line take precedence over the file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use label_sync_core::DEFAULT_LABELS_FILENAME;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "label-sync.toml";

/// Default root of the GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the label-sync CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// api_base_url = "https://github.example.com/api/v3"
/// labels_file = ".github/labels.yml"
/// keep_going = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the GitHub REST API, e.g. for GitHub Enterprise Server.
    #[serde(default = "AppConfig::default_api_base_url")]
    pub api_base_url: String,

    /// Path of the YAML file holding the desired labels.
    #[serde(default = "AppConfig::default_labels_file")]
    pub labels_file: PathBuf,

    /// Keep reconciling the remaining labels when one operation fails.
    #[serde(default)]
    pub keep_going: bool,
}

impl AppConfig {
    fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    fn default_labels_file() -> PathBuf {
        PathBuf::from(DEFAULT_LABELS_FILENAME)
    }

    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if:
    /// - The specified file does not exist
    /// - The file cannot be read due to permissions or I/O issues
    /// - The file contains invalid TOML or unknown keys
    /// - `api_base_url` is not a valid URL
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use label_sync_cli::config::AppConfig;
    ///
    /// let config_path = Path::new("./label-sync.toml");
    /// match AppConfig::load(config_path) {
    ///     Ok(config) => println!("Labels file: {:?}", config.labels_file),
    ///     Err(e) => eprintln!("Failed to load config: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        config.validate()?;

        info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Loads the configuration the CLI runs with.
    ///
    /// An explicit path must exist. Without one, the default file in the
    /// current directory is used if present, otherwise the defaults apply.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, Error> {
        match config_path {
            Some(path) => Self::load(path),
            None => {
                let path = get_config_path(None);
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("No configuration file at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let url = url::Url::parse(&self.api_base_url).map_err(|e| {
            Error::Config(format!(
                "Invalid api_base_url '{}': {}",
                self.api_base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Invalid api_base_url '{}': scheme must be http or https",
                self.api_base_url
            )));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: AppConfig::default_api_base_url(),
            labels_file: AppConfig::default_labels_file(),
            keep_going: false,
        }
    }
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path
/// - If `config_path` is `None`, returns `./label-sync.toml` in the current directory
/// - Falls back to `.` if the working directory cannot be determined
pub fn get_config_path(config_path: Option<&Path>) -> PathBuf {
    if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
