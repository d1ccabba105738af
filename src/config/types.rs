//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::draw::{ChalkStyle, DusterStyle};
use serde::{Deserialize, Serialize};

/// Chalk brush settings.
///
/// Controls the appearance of the chalk tool. All widths and radii are in
/// pixels on the board raster.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChalkConfig {
    /// Body stroke width in pixels (valid range: 1.0 - 8.0)
    #[serde(default = "default_chalk_width")]
    pub width: f64,

    /// Soft glow radius around the body in pixels (valid range: 0.0 - 4.0)
    #[serde(default = "default_glow_radius")]
    pub glow_radius: f64,

    /// Opacity of the grainy texture pass (valid range: 0.0 - 1.0)
    #[serde(default = "default_texture_alpha")]
    pub texture_alpha: f64,

    /// Maximum per-axis random offset of the texture pass in pixels
    /// (valid range: 0.0 - 4.0)
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for ChalkConfig {
    fn default() -> Self {
        Self {
            width: default_chalk_width(),
            glow_radius: default_glow_radius(),
            texture_alpha: default_texture_alpha(),
            jitter: default_jitter(),
        }
    }
}

impl ChalkConfig {
    /// Builds the brush style used by the renderer.
    pub fn style(&self) -> ChalkStyle {
        ChalkStyle {
            width: self.width,
            glow_radius: self.glow_radius,
            texture_alpha: self.texture_alpha,
            jitter: self.jitter,
        }
    }
}

/// Duster (eraser) settings.
///
/// The duster wipes with an alpha-subtracting cut pass and then deposits a
/// faint residue film, so a wiped board never looks factory-clean.
#[derive(Debug, Serialize, Deserialize)]
pub struct DusterConfig {
    /// Width of the cut pass in pixels (valid range: 10.0 - 120.0)
    #[serde(default = "default_duster_width")]
    pub width: f64,

    /// Feather radius softening the cut edge (valid range: 0.0 - 30.0)
    #[serde(default = "default_feather")]
    pub feather: f64,

    /// Width of the residue pass in pixels (clamped to the cut width)
    #[serde(default = "default_residue_width")]
    pub residue_width: f64,

    /// Opacity of the residue pass (valid range: 0.0 - 0.5)
    #[serde(default = "default_residue_alpha")]
    pub residue_alpha: f64,
}

impl Default for DusterConfig {
    fn default() -> Self {
        Self {
            width: default_duster_width(),
            feather: default_feather(),
            residue_width: default_residue_width(),
            residue_alpha: default_residue_alpha(),
        }
    }
}

impl DusterConfig {
    /// Builds the brush style used by the renderer.
    pub fn style(&self) -> DusterStyle {
        DusterStyle {
            width: self.width,
            feather: self.feather,
            residue_width: self.residue_width,
            residue_alpha: self.residue_alpha,
        }
    }
}

/// Board appearance settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Background fill behind the stroke raster - either a named color
    /// (slate, charcoal, black, white) or an RGB array like `[30, 30, 46]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar displaying the active tool and key hints
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_chalk_width() -> f64 {
    2.0
}

fn default_glow_radius() -> f64 {
    1.0
}

fn default_texture_alpha() -> f64 {
    0.4
}

fn default_jitter() -> f64 {
    1.0
}

fn default_duster_width() -> f64 {
    40.0
}

fn default_feather() -> f64 {
    10.0
}

fn default_residue_width() -> f64 {
    35.0
}

fn default_residue_alpha() -> f64 {
    0.05
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("slate".to_string())
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_status_font_size() -> f64 {
    16.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.6]
}

fn default_status_text_color() -> [f64; 4] {
    [0.95, 0.95, 0.95, 1.0]
}
