//! Configuration file support for chalkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/chalkboard/config.toml`. Settings
//! include brush appearance, board background, performance tuning, and UI
//! preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition};
pub use types::{
    BoardConfig, ChalkConfig, DusterConfig, PerformanceConfig, StatusBarStyle, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// sensible defaults and fall back to those when absent from the file.
///
/// # Example TOML
/// ```toml
/// [chalk]
/// width = 2.0
/// glow_radius = 1.0
///
/// [duster]
/// width = 40.0
/// feather = 10.0
///
/// [board]
/// background = "slate"
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Chalk brush appearance
    #[serde(default)]
    pub chalk: ChalkConfig,

    /// Duster (eraser) appearance
    #[serde(default)]
    pub duster: DusterConfig,

    /// Board background settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged, so a hand-edited config can never produce unrenderable brushes.
    ///
    /// Validated ranges:
    /// - `chalk.width`: 1.0 - 8.0
    /// - `chalk.glow_radius`: 0.0 - 4.0
    /// - `chalk.texture_alpha`: 0.0 - 1.0
    /// - `chalk.jitter`: 0.0 - 4.0
    /// - `duster.width`: 10.0 - 120.0
    /// - `duster.feather`: 0.0 - 30.0
    /// - `duster.residue_width`: 0.0 - `duster.width`
    /// - `duster.residue_alpha`: 0.0 - 0.5
    /// - `performance.buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        if !(1.0..=8.0).contains(&self.chalk.width) {
            log::warn!(
                "Invalid chalk width {:.1}, clamping to 1.0-8.0 range",
                self.chalk.width
            );
            self.chalk.width = self.chalk.width.clamp(1.0, 8.0);
        }

        if !(0.0..=4.0).contains(&self.chalk.glow_radius) {
            log::warn!(
                "Invalid chalk glow_radius {:.1}, clamping to 0.0-4.0 range",
                self.chalk.glow_radius
            );
            self.chalk.glow_radius = self.chalk.glow_radius.clamp(0.0, 4.0);
        }

        if !(0.0..=1.0).contains(&self.chalk.texture_alpha) {
            log::warn!(
                "Invalid chalk texture_alpha {:.2}, clamping to 0.0-1.0 range",
                self.chalk.texture_alpha
            );
            self.chalk.texture_alpha = self.chalk.texture_alpha.clamp(0.0, 1.0);
        }

        if !(0.0..=4.0).contains(&self.chalk.jitter) {
            log::warn!(
                "Invalid chalk jitter {:.1}, clamping to 0.0-4.0 range",
                self.chalk.jitter
            );
            self.chalk.jitter = self.chalk.jitter.clamp(0.0, 4.0);
        }

        if !(10.0..=120.0).contains(&self.duster.width) {
            log::warn!(
                "Invalid duster width {:.1}, clamping to 10.0-120.0 range",
                self.duster.width
            );
            self.duster.width = self.duster.width.clamp(10.0, 120.0);
        }

        if !(0.0..=30.0).contains(&self.duster.feather) {
            log::warn!(
                "Invalid duster feather {:.1}, clamping to 0.0-30.0 range",
                self.duster.feather
            );
            self.duster.feather = self.duster.feather.clamp(0.0, 30.0);
        }

        if !(0.0..=self.duster.width).contains(&self.duster.residue_width) {
            log::warn!(
                "Invalid duster residue_width {:.1}, clamping to 0.0-{:.1} range",
                self.duster.residue_width,
                self.duster.width
            );
            self.duster.residue_width = self.duster.residue_width.clamp(0.0, self.duster.width);
        }

        if !(0.0..=0.5).contains(&self.duster.residue_alpha) {
            log::warn!(
                "Invalid duster residue_alpha {:.2}, clamping to 0.0-0.5 range",
                self.duster.residue_alpha
            );
            self.duster.residue_alpha = self.duster.residue_alpha.clamp(0.0, 0.5);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/chalkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("chalkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Failed to parse config TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse `~/.config/chalkboard/config.toml`. If the
    /// file doesn't exist, returns a Config with default values. All loaded
    /// values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/chalkboard/config.toml`, creating the parent directory when
    /// missing. Kept for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SLATE;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.chalk.width, 2.0);
        assert_eq!(config.duster.width, 40.0);
        assert_eq!(config.performance.buffer_count, 3);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.board.background.to_color(), SLATE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [chalk]
            width = 50.0
            jitter = -3.0

            [duster]
            width = 500.0
            residue_alpha = 0.9

            [performance]
            buffer_count = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.chalk.width, 8.0);
        assert_eq!(config.chalk.jitter, 0.0);
        assert_eq!(config.duster.width, 120.0);
        assert_eq!(config.duster.residue_alpha, 0.5);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn residue_width_is_clamped_to_cut_width() {
        let config = Config::from_toml_str(
            r#"
            [duster]
            width = 20.0
            residue_width = 35.0
            "#,
        )
        .unwrap();

        assert_eq!(config.duster.residue_width, 20.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("chalk = ").is_err());
    }

    #[test]
    fn background_accepts_names_and_rgb() {
        let named = Config::from_toml_str("[board]\nbackground = \"charcoal\"").unwrap();
        assert_eq!(named.board.background.to_color(), crate::draw::CHARCOAL);

        let rgb = Config::from_toml_str("[board]\nbackground = [255, 0, 0]").unwrap();
        let color = rgb.board.background.to_color();
        assert!((color.r - 1.0).abs() < f64::EPSILON);
        assert_eq!(color.g, 0.0);
    }

    #[test]
    fn unknown_background_name_falls_back_to_slate() {
        let config = Config::from_toml_str("[board]\nbackground = \"puce\"").unwrap();
        assert_eq!(config.board.background.to_color(), SLATE);
    }
}
