// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Drag threshold and prefetch radius
//! - `[startup]` - Splash duration and initial section
//! - `[content]` - Path of a portfolio file replacing the built-in one
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SHOWREEL_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use showreel::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("cs".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::section::SectionId;
use crate::domain::ui::{DragThreshold, SplashDelay};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the file exists but cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "cs").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Swipe distance in logical pixels before a drag navigates.
    #[serde(
        default = "default_drag_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold: Option<f32>,

    /// Neighbours fetched on each side of the current item.
    #[serde(
        default = "default_prefetch_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_count: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            drag_threshold: default_drag_threshold(),
            prefetch_count: default_prefetch_count(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn drag_threshold(&self) -> DragThreshold {
        self.drag_threshold
            .map(DragThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn prefetch_count(&self) -> usize {
        self.prefetch_count
            .unwrap_or(DEFAULT_PREFETCH_COUNT)
            .min(MAX_PREFETCH_COUNT)
    }
}

/// Start-up behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartupConfig {
    #[serde(
        default = "default_splash_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub splash_duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_section: Option<SectionId>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: default_splash_duration_ms(),
            initial_section: None,
        }
    }
}

impl StartupConfig {
    #[must_use]
    pub fn splash_delay(&self) -> SplashDelay {
        self.splash_duration_ms
            .map(SplashDelay::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn initial_section(&self) -> SectionId {
        self.initial_section.unwrap_or_default()
    }
}

/// Portfolio content source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_drag_threshold() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD)
}

fn default_prefetch_count() -> Option<usize> {
    Some(DEFAULT_PREFETCH_COUNT)
}

fn default_splash_duration_ms() -> Option<u64> {
    Some(DEFAULT_SPLASH_DURATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("cs".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                drag_threshold: Some(150.0),
                prefetch_count: Some(2),
            },
            startup: StartupConfig {
                splash_duration_ms: Some(0),
                initial_section: Some(SectionId::Film),
            },
            content: ContentConfig {
                path: Some(PathBuf::from("/tmp/portfolio.toml")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.drag_threshold, Some(DEFAULT_DRAG_THRESHOLD));
        assert_eq!(config.gallery.prefetch_count(), 1);
        assert_eq!(config.startup.splash_delay().as_millis(), 1_500);
        assert_eq!(config.startup.initial_section(), SectionId::Summary);
        assert!(config.content.path.is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("write file");

        let loaded = load_from_path(&config_path).expect("empty file is valid");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let config = Config {
            gallery: GalleryConfig {
                drag_threshold: Some(5_000.0),
                prefetch_count: Some(99),
            },
            startup: StartupConfig {
                splash_duration_ms: Some(60_000),
                ..StartupConfig::default()
            },
            ..Config::default()
        };
        assert_abs_diff_eq!(config.gallery.drag_threshold().value(), MAX_DRAG_THRESHOLD);
        assert_eq!(config.gallery.prefetch_count(), MAX_PREFETCH_COUNT);
        assert_eq!(
            config.startup.splash_delay().as_millis(),
            MAX_SPLASH_DURATION_MS
        );
    }

    #[test]
    fn sections_parse_from_handwritten_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"Dark\"\n\n[startup]\ninitial_section = \"skills\"\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("valid config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.startup.initial_section(), SectionId::Skills);
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }
}
