//! Configuration loading and parsing

use anyhow::{Context, Result};
use calc_core::KeyMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from calc.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Extra or replacement key bindings, layered over the defaults
    #[serde(default = "KeyMap::empty")]
    pub keys: KeyMap,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Show the pending operator next to the display value
    #[serde(default = "default_true")]
    pub show_operator: bool,
    /// Prompt printed before each interactive line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_operator: default_true(),
            prompt: default_prompt(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: KeyMap::empty(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default key map with this config's bindings applied on top
    pub fn key_map(&self) -> KeyMap {
        KeyMap::default().merge(self.keys.clone())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    log::debug!("{} extra key binding(s) from {:?}", config.keys.len(), path);
    Ok(config)
}
