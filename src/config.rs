//! Configuration file handling for qrtext.
//!
//! Loads defaults for glyphs and generation settings from
//! `~/.config/qrtext/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for qrtext.
/// Loaded from the platform config dir (or a custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub generate: GenerateSection,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    /// Glyph for light modules
    #[serde(default)]
    pub white: Option<String>,
    /// Glyph for dark modules
    #[serde(default)]
    pub black: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    #[serde(default)]
    pub version: Option<i16>,
    #[serde(default)]
    pub border: Option<u32>,
    /// One of L, M, Q, H
    #[serde(default)]
    pub correction: Option<String>,
    #[serde(default)]
    pub upscale: Option<u32>,
}

impl Config {
    /// Load configuration.
    ///
    /// With `None`, the default path is used and a missing file yields the
    /// default config. An explicit path must exist. Returns an error if the
    /// file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("No config file at '{}', using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' not found", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NotFound { .. } => None,
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("qrtext").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/qrtext/config.toml")
        })
}
