use anyhow::Result;

pub mod wayland;

/// Run the Wayland backend with the full event loop.
///
/// # Arguments
/// * `initial_tool` - Optional tool name to start with (overrides the default)
pub fn run_wayland(initial_tool: Option<String>) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(initial_tool);
    backend.run()
}
