// File: src/config.rs
// Purpose: Configuration parsing from wordlimit.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::validation::Messages;

/// Extension configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Textarea rendering defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    /// `cols` when the tag has no size option (default: 40)
    #[serde(default = "default_cols")]
    pub default_cols: u32,

    /// `rows` when the tag has no size option (default: 10)
    #[serde(default = "default_rows")]
    pub default_rows: u32,
}

fn default_cols() -> u32 {
    40
}

fn default_rows() -> u32 {
    10
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_cols: default_cols(),
            default_rows: default_rows(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./wordlimit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("wordlimit.toml")
    }
}
