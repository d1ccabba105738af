//! Input handling and tool state machine.
//!
//! This module translates backend pointer, touch, and keyboard events into
//! drawing actions. It maintains the active tool, the idle/drawing state
//! machine, and the queue of stroke segments awaiting paint.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{DrawingState, InputState, PendingSegment, StrokeSource};
pub use tool::Tool;
