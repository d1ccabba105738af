// Responds to layer-shell configure/close events, keeping the surface and
// board raster sized to match the compositor.
use log::info;
use smithay_client_toolkit::shell::wlr_layer::{
    LayerShellHandler, LayerSurface, LayerSurfaceConfigure,
};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl LayerShellHandler for WaylandState {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        let (width, height) = configure.new_size;
        info!("Layer surface configured: {}x{}", width, height);

        if width > 0 && height > 0 {
            let size_changed = self.surface.update_dimensions(width, height);

            if size_changed || self.board.is_none() {
                if size_changed {
                    info!("Surface size changed - recreating pool and board raster");
                }
                self.ensure_board(width, height);
            }

            self.input_state.update_screen_dimensions(width, height);
        }

        self.surface.set_configured(true);
        self.input_state.needs_redraw = true;
    }
}
