//! Wayland backend: layer surface, shared-memory buffers, and seat input.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
