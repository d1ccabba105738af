//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (tool selection uses C and D)
    Char(char),
    /// Escape key (exit)
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (the drawing button)
    Left,
    /// Right mouse button (cancels an in-progress stroke)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
