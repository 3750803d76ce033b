//! User configuration.
//!
//! Read from `<config dir>/cclight/config.toml` when present; every field
//! has a default so a missing file or missing keys just work.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persistent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "default" or "monochrome".
    pub theme: String,
    /// External parser command; the input file path is appended.
    pub parser_cmd: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            parser_cmd: vec![
                "npx".to_string(),
                "tree-sitter".to_string(),
                "parse".to_string(),
            ],
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("cclight").join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }
}
