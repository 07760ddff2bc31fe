// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! Preferences cover the backend endpoint, the preferred theme mode, and the
//! marketplace poll interval. Everything is optional in the file; missing
//! fields fall back to defaults so old config files keep working.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Prooforia";

/// Backend used when the config file and `--api-url` flag are both absent.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Marketplace refresh cadence in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the prooforia backend API.
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub poll_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            theme_mode: ThemeMode::System,
            poll_interval_secs: Some(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Resolved backend base URL, trailing slash stripped.
    pub fn api_base_url(&self) -> String {
        let url = self
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL);
        url.trim_end_matches('/').to_string()
    }

    /// Resolved poll interval, clamped to at least one second.
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
            .max(1)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
