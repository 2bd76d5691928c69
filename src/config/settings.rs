//! Application settings loaded from an optional `order-desk.toml`.
//!
//! The file is optional. When present it can set the backend URL and the
//! currency symbol used when rendering amounts. The backend URL is finally
//! resolved as: command-line flag, then `BACKEND_URL`, then the file, then
//! the localhost default.

use crate::config::backend::{self, DEFAULT_BACKEND_URL};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "order-desk.toml";

/// Structure of `order-desk.toml`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// `[backend]` table
    pub backend: BackendSection,
    /// `[display]` table
    pub display: DisplaySection,
}

/// `[backend]` table
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendSection {
    /// Base URL of the REST backend
    pub url: Option<String>,
}

/// `[display]` table
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySection {
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
        }
    }
}

/// Fully resolved settings the rest of the app runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Normalized backend base URL, without trailing slash
    pub backend_url: String,
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl AppConfig {
    /// Merges the configuration sources, highest priority first.
    ///
    /// # Errors
    /// Returns `Error::Config` if the winning URL is not a valid http(s) URL.
    pub fn resolve(
        file: FileConfig,
        env_url: Option<String>,
        cli_url: Option<String>,
    ) -> Result<Self> {
        let raw_url = cli_url
            .or(env_url)
            .or(file.backend.url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Ok(Self {
            backend_url: backend::normalize_base_url(&raw_url)?,
            currency: file.display.currency,
        })
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads the explicit config file if one was given, otherwise `order-desk.toml`
/// when it exists, otherwise the defaults.
///
/// # Errors
/// Returns an error if an explicitly named file is missing or any file found is malformed.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        load_config(default_path)
    } else {
        debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
        Ok(FileConfig::default())
    }
}

/// Builds the application configuration from every source.
///
/// `.env` should already be loaded so `BACKEND_URL` is visible.
///
/// # Errors
/// Returns an error if the config file is unreadable or the backend URL is invalid.
pub fn load_app_configuration(
    cli_url: Option<String>,
    config_path: Option<&Path>,
) -> Result<AppConfig> {
    let file = load_file_config(config_path)?;
    let env_url = backend::backend_url_from_env()?;
    let config = AppConfig::resolve(file, env_url, cli_url)?;
    info!(backend_url = %config.backend_url, "Configuration resolved");
    Ok(config)
}
