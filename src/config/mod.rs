// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use drive_lens::config::{self, Config, SortDirection};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.sort_direction = Some(SortDirection::Descending);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DriveLens";

/// Idle seconds before the player overlay hides its controls.
pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u32 = 3;
pub const MIN_OVERLAY_TIMEOUT_SECS: u32 = 1;
pub const MAX_OVERLAY_TIMEOUT_SECS: u32 = 30;

/// Listing endpoint used when the config and CLI are silent.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/drive-list";

/// Base of the opaque embedded viewer; the player appends `/{id}/preview`.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://drive.google.com/file";

/// Direction of the locale-aware name sort in the browser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction; the header button flips between the two.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    #[serde(default)]
    pub overlay_timeout_secs: Option<u32>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub viewer_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            sort_direction: Some(SortDirection::Ascending),
            theme_mode: Some(ThemeMode::System),
            overlay_timeout_secs: Some(DEFAULT_OVERLAY_TIMEOUT_SECS),
            base_url: None,
            viewer_base_url: None,
        }
    }
}

/// Clamps a persisted overlay timeout into the supported range so broken
/// configs cannot request a zero or absurd idle delay.
#[must_use]
pub fn clamp_overlay_timeout(value: u32) -> u32 {
    value.clamp(MIN_OVERLAY_TIMEOUT_SECS, MAX_OVERLAY_TIMEOUT_SECS)
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

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
