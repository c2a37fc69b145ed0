use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Relative path or http(s) URL of the skills JSON document
    #[serde(default = "default_location")]
    pub location: String,

    /// Request timeout in seconds for HTTP sources (default: 0, no timeout)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Class of the container the skills list is rendered into
    #[serde(default = "default_container_class")]
    pub container_class: String,

    /// Output file; empty means stdout
    #[serde(default)]
    pub output: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            container_class: default_container_class(),
            output: String::new(),
        }
    }
}

fn default_location() -> String {
    "db/skills.json".to_string()
}

fn default_container_class() -> String {
    "skills-list".to_string()
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // An explicit path must load
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("skills-list.toml") {
            debug!("Loaded config from ./skills-list.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("skills-list").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn output_path(&self) -> Option<&str> {
        match self.display.output.as_str() {
            "" => None,
            path => Some(path),
        }
    }
}
