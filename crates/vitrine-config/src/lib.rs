//! Configuration loading for the vitrine landing page.
//!
//! Reads `vitrine/config.toml` from the platform config directory and
//! falls back to defaults on any missing file or parse error.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use vitrine_core::Accent;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the wave band animates.
    pub animating: bool,
    /// Accent color for the page chrome.
    pub accent: Accent,
    /// Whether to subscribe to pointer movement.
    pub mouse: bool,
    /// Site metadata fed into the structured data blocks.
    pub site: SiteMeta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animating: true,
            accent: Accent::default(),
            mouse: true,
            site: SiteMeta::default(),
        }
    }
}

/// Site identity for structured data. Serializes directly into the
/// page's structured data records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMeta {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "vitrine".to_string(),
            description: "A terminal landing page".to_string(),
            url: "https://github.com/vitrine-tui/vitrine".to_string(),
        }
    }
}

/// Parse a configuration document.
pub fn parse(document: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(document)
}

/// Path of the user configuration file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the user configuration, falling back to defaults.
pub fn load() -> Config {
    config_path()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|document| parse(&document).ok())
        .unwrap_or_default()
}
