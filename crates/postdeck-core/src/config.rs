//! Configuration management for postdeck.
//!
//! Loads configuration from `${POSTDECK_HOME}/config.toml` with defaults for
//! every missing key.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How post content markup is turned into terminal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Strip tags and scripts, keep readable text.
    #[default]
    Sanitized,
    /// Show the backend's markup verbatim.
    Raw,
}

impl ContentMode {
    pub fn label(self) -> &'static str {
        match self {
            ContentMode::Sanitized => "sanitized",
            ContentMode::Raw => "raw",
        }
    }
}

pub mod paths {
    //! Path resolution for postdeck configuration and data directories.
    //!
    //! POSTDECK_HOME resolution order:
    //! 1. POSTDECK_HOME environment variable (if set)
    //! 2. ~/.config/postdeck (default)
    //! 3. ./.postdeck when no home directory can be determined

    use std::path::PathBuf;

    pub fn postdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("POSTDECK_HOME")
            && !home.is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".postdeck"),
            |h| h.join(".config").join("postdeck"),
        )
    }

    pub fn config_path() -> PathBuf {
        postdeck_home().join("config.toml")
    }

    pub fn logs_dir() -> PathBuf {
        postdeck_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin of the posts backend.
    pub base_url: String,
    /// Rendering of post content markup.
    pub content_mode: ContentMode,
    /// Default log filter when POSTDECK_LOG is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            content_mode: ContentMode::default(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_LOG_LEVEL: &'static str = "info";

    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
