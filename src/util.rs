//! Geometry and color-name helpers shared across modules.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps board color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "slate", "charcoal", "black", "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "slate" => Some(SLATE),
        "charcoal" => Some(CHARCOAL),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_non_positive_dimensions() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::new(0, 0, 10, -1).is_none());
        assert!(Rect::new(-5, -5, 10, 10).is_some());
    }

    #[test]
    fn rect_from_min_max_computes_extent() {
        let rect = Rect::from_min_max(2, 3, 12, 8).unwrap();
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 3);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn name_color_mappings_cover_board_palette() {
        assert_eq!(name_to_color("slate").unwrap(), SLATE);
        assert_eq!(name_to_color("Charcoal").unwrap(), CHARCOAL);
        assert!(name_to_color("chartreuse").is_none());
    }
}
