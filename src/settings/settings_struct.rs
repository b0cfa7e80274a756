use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_info_log_level() -> String {
    "info".to_string()
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// How decoded nodes are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `- {json}` line per node, ready for a clash `proxies:` list.
    #[default]
    Clash,
    /// One JSON object per line.
    Json,
    /// A YAML sequence of nodes.
    Yaml,
    /// The raw links, undecoded.
    Links,
}

impl FromStr for OutputFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clash" => Ok(OutputFormat::Clash),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "links" => Ok(OutputFormat::Links),
            _ => Err(SettingsError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSettings {
    #[serde(default = "default_info_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            log_level: default_info_log_level(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Settings for the command line tool, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub common: CommonSettings,
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from `path`. An empty path yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::load_from_content(&content)
    }
}
