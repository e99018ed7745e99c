use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Backend the CLI talks to when no config file overrides it.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the exam-listing backend
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Conducting-body filter applied when no --category flag is given
    #[serde(default)]
    pub default_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            default_category: None,
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Get the config directory path (~/.config/examcal)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("examcal");
    Ok(config_dir)
}

/// Get the config file path (~/.config/examcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/examcal/config.toml.
///
/// A missing file is not an error: every field has a usable default,
/// so first runs work without any setup.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}
