//! Library exports for reusing chalkboard subsystems.
//!
//! Exposes the board raster, brushes, input state machine, and configuration
//! types so integration tests and external tools can exercise them without a
//! Wayland session.

pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
