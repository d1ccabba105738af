// Feeds touch events into the drawing state machine. The surface receives
// touch directly, so no scroll-vs-draw disambiguation is needed; ownership of
// a stroke by the first touch point is enforced in `InputState`.
use log::debug;
use smithay_client_toolkit::seat::touch::TouchHandler;
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_surface, wl_touch},
};

use super::super::state::WaylandState;

impl TouchHandler for WaylandState {
    #[allow(clippy::too_many_arguments)]
    fn down(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        _surface: wl_surface::WlSurface,
        id: i32,
        position: (f64, f64),
    ) {
        debug!("Touch {} down at ({:.1}, {:.1})", id, position.0, position.1);
        self.input_state
            .on_touch_down(id, position.0 as i32, position.1 as i32);
    }

    fn up(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        id: i32,
    ) {
        debug!("Touch {} up", id);
        self.input_state.on_touch_up(id);
    }

    fn motion(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _time: u32,
        id: i32,
        position: (f64, f64),
    ) {
        self.input_state
            .on_touch_motion(id, position.0 as i32, position.1 as i32);
    }

    fn shape(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _major: f64,
        _minor: f64,
    ) {
    }

    fn orientation(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _orientation: f64,
    ) {
    }

    fn cancel(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _touch: &wl_touch::WlTouch) {
        debug!("Touch session cancelled by compositor");
        self.input_state.on_touch_cancel();
    }
}
