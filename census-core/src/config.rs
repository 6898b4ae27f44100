//! Configuration management
//!
//! Compatible with the desktop viewer's settings.json format:
//! ```json
//! {
//!   "app": { "demoMode": false, "sourceUrl": null, "debounceMs": 1000 }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::services::debounce::DEFAULT_DEBOUNCE_MS;

/// Raw settings.json structure (matching the desktop format)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default = "default_debounce_ms")]
    debounce_ms: u64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            demo_mode: false,
            source_url: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            other: HashMap::new(),
        }
    }
}

/// Census configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    /// Endpoint override; None means the built-in default
    pub source_url: Option<String>,
    pub debounce_ms: u64,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            source_url: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the census directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (cs demo on)
    /// 2. Environment variable CENSUS_DEMO_MODE (for CI/testing)
    pub fn load(census_dir: &Path) -> Result<Self> {
        let settings_path = census_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = demo_mode_override(
            std::env::var("CENSUS_DEMO_MODE").ok().as_deref(),
            raw.app.demo_mode,
        );

        Ok(Self {
            demo_mode,
            source_url: raw.app.source_url.clone(),
            debounce_ms: raw.app.debounce_ms,
            _raw_settings: raw,
        })
    }

    /// Save config to the census directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, census_dir: &Path) -> Result<()> {
        let settings_path = census_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Update only the fields we manage
        settings.app.demo_mode = self.demo_mode;
        settings.app.source_url = self.source_url.clone();
        settings.app.debounce_ms = self.debounce_ms;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

/// Resolve the demo-mode env override against the settings value
fn demo_mode_override(env_value: Option<&str>, from_settings: bool) -> bool {
    match env_value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
        Some("false" | "0" | "no" | "FALSE" | "NO") => false,
        _ => from_settings,
    }
}
