//! Rendering primitives for the chalkboard raster (Cairo-based).
//!
//! This module defines the drawing core:
//! - [`Color`]: RGBA color representation with board palette constants
//! - [`StrokeSegment`]: one line segment of an in-progress stroke
//! - [`Board`]: the persistent stroke raster
//! - Brush pass functions for the chalk and duster tools
//! - [`DirtyTracker`]: damage accumulation between frames

pub mod board;
pub mod brush;
pub mod color;
pub mod dirty;

// Re-export commonly used types at module level
pub use board::{Board, BoardError};
pub use brush::{ChalkStyle, DusterStyle, StrokeSegment};
pub use color::Color;
pub use dirty::DirtyTracker;

// Re-export color constants for public API (not all used internally)
#[allow(unused_imports)]
pub use color::{BLACK, CHARCOAL, SLATE, TRANSPARENT, WHITE};
