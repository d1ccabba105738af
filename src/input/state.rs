//! Drawing state machine and input state management.

use super::events::{Key, MouseButton};
use super::tool::Tool;
use crate::draw::{DirtyTracker, StrokeSegment};
use crate::util::Rect;
use log::debug;

/// Identifies which device owns the in-progress stroke.
///
/// The first touch point to land owns a touch stroke; concurrent touch points
/// and stray pointer motion must not feed segments into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeSource {
    /// Stroke driven by the seat pointer (mouse/tablet).
    Pointer,
    /// Stroke driven by one touch point.
    Touch { id: i32 },
}

/// Current drawing mode state machine.
///
/// `Drawing` holds exactly between a press/touch-down and the matching
/// release, leave, or cancel. No stroke segment is emitted outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for input
    Idle,
    /// Actively drawing (button held or finger down)
    Drawing {
        /// Last recorded X coordinate, surface-local
        last_x: i32,
        /// Last recorded Y coordinate, surface-local
        last_y: i32,
        /// Device driving this stroke
        source: StrokeSource,
    },
}

/// A stroke segment queued for painting, tagged with the tool that was
/// active when the motion event arrived.
///
/// Tagging at emission time is what makes mid-gesture tool switches apply to
/// subsequent segments only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSegment {
    pub segment: StrokeSegment,
    pub tool: Tool,
}

/// Main input state for the drawing session.
///
/// Translates backend pointer, touch, and keyboard events into queued stroke
/// segments and redraw/exit flags. It owns no rendering resources; the
/// backend drains [`take_pending_segments`](Self::take_pending_segments) and
/// paints them into the board raster.
pub struct InputState {
    /// Currently selected tool
    pub tool: Tool,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the backend after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the backend after configuration)
    pub screen_height: u32,
    /// Segments emitted since the last drain
    pending: Vec<PendingSegment>,
    /// Tracks dirty regions between renders
    dirty: DirtyTracker,
}

impl InputState {
    /// Creates a new input state starting in `Idle` with the given tool.
    pub fn new(initial_tool: Tool) -> Self {
        Self {
            tool: initial_tool,
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            pending: Vec::new(),
            dirty: DirtyTracker::new(),
        }
    }

    /// Selects the active tool.
    ///
    /// No constraints and no failure mode; segments emitted after this call
    /// use the new tool's brush. Already-painted pixels are untouched.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool selected: {tool}");
            self.tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Updates surface dimensions after backend configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    // ------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------

    /// Processes a mouse button press at surface-local `(x, y)`.
    ///
    /// Left press records the point as last-point and enters `Drawing`; the
    /// segment renderer only runs on subsequent motion. Right press cancels
    /// an in-progress stroke.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => self.begin_stroke(x, y, StrokeSource::Pointer),
            MouseButton::Right => self.finish_stroke(),
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion; emits a segment only while drawing a
    /// pointer-owned stroke.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.extend_stroke(x, y, StrokeSource::Pointer);
    }

    /// Processes a mouse button release.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left
            && matches!(
                self.state,
                DrawingState::Drawing {
                    source: StrokeSource::Pointer,
                    ..
                }
            )
        {
            self.finish_stroke();
        }
    }

    /// Processes the pointer leaving the surface. Ends any pointer stroke so
    /// the next gesture starts cleanly instead of joining across the gap.
    pub fn on_mouse_leave(&mut self) {
        if matches!(
            self.state,
            DrawingState::Drawing {
                source: StrokeSource::Pointer,
                ..
            }
        ) {
            self.finish_stroke();
        }
    }

    // ------------------------------------------------------------------
    // Touch events
    // ------------------------------------------------------------------

    /// Processes a touch-down. The first touch point owns the stroke; any
    /// additional concurrent points are ignored until it lifts.
    pub fn on_touch_down(&mut self, id: i32, x: i32, y: i32) {
        if matches!(self.state, DrawingState::Idle) {
            self.begin_stroke(x, y, StrokeSource::Touch { id });
        } else {
            debug!("Ignoring extra touch point {id} during active stroke");
        }
    }

    /// Processes touch motion for the owning touch point.
    pub fn on_touch_motion(&mut self, id: i32, x: i32, y: i32) {
        self.extend_stroke(x, y, StrokeSource::Touch { id });
    }

    /// Processes a touch-up; ends the stroke when the owning point lifts.
    pub fn on_touch_up(&mut self, id: i32) {
        if let DrawingState::Drawing {
            source: StrokeSource::Touch { id: owner },
            ..
        } = self.state
            && owner == id
        {
            self.finish_stroke();
        }
    }

    /// Processes a touch-session cancel from the compositor. Drops any touch
    /// stroke without emitting further segments.
    pub fn on_touch_cancel(&mut self) {
        if matches!(
            self.state,
            DrawingState::Drawing {
                source: StrokeSource::Touch { .. },
                ..
            }
        ) {
            self.finish_stroke();
        }
    }

    // ------------------------------------------------------------------
    // Keyboard events
    // ------------------------------------------------------------------

    /// Processes a key press: `C` selects chalk, `D` the duster, Escape exits.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Char('c') | Key::Char('C') => self.select_tool(Tool::Chalk),
            Key::Char('d') | Key::Char('D') => self.select_tool(Tool::Duster),
            Key::Escape => {
                debug!("Exit requested");
                self.should_exit = true;
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Stroke plumbing
    // ------------------------------------------------------------------

    fn begin_stroke(&mut self, x: i32, y: i32, source: StrokeSource) {
        self.state = DrawingState::Drawing {
            last_x: x,
            last_y: y,
            source,
        };
    }

    fn extend_stroke(&mut self, x: i32, y: i32, from: StrokeSource) {
        if let DrawingState::Drawing {
            last_x,
            last_y,
            source,
        } = self.state
            && source == from
        {
            self.pending.push(PendingSegment {
                segment: StrokeSegment::new(last_x, last_y, x, y),
                tool: self.tool,
            });
            self.state = DrawingState::Drawing {
                last_x: x,
                last_y: y,
                source,
            };
            self.needs_redraw = true;
        }
    }

    fn finish_stroke(&mut self) {
        self.state = DrawingState::Idle;
    }

    /// Drains segments queued since the last call, oldest first.
    pub fn take_pending_segments(&mut self) -> Vec<PendingSegment> {
        std::mem::take(&mut self.pending)
    }

    // ------------------------------------------------------------------
    // Damage plumbing
    // ------------------------------------------------------------------

    /// Records a damaged rectangle for the next commit.
    pub fn mark_dirty(&mut self, rect: Option<Rect>) {
        self.dirty.mark_optional_rect(rect);
    }

    /// Marks the whole surface damaged (resize, tool tray updates).
    pub fn mark_full_damage(&mut self) {
        self.dirty.mark_full();
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty.take_regions(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(state: &mut InputState, points: &[(i32, i32)]) {
        let (x, y) = points[0];
        state.on_mouse_press(MouseButton::Left, x, y);
        for &(x, y) in &points[1..] {
            state.on_mouse_motion(x, y);
        }
        state.on_mouse_release(MouseButton::Left);
    }

    #[test]
    fn drawing_holds_exactly_between_down_and_up() {
        let mut state = InputState::new(Tool::Chalk);
        assert_eq!(state.state, DrawingState::Idle);

        state.on_mouse_press(MouseButton::Left, 10, 10);
        assert!(matches!(state.state, DrawingState::Drawing { .. }));

        state.on_mouse_motion(20, 20);
        assert!(matches!(state.state, DrawingState::Drawing { .. }));

        state.on_mouse_release(MouseButton::Left);
        assert_eq!(state.state, DrawingState::Idle);
    }

    #[test]
    fn motion_while_idle_emits_nothing() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_mouse_motion(50, 50);
        state.on_mouse_motion(60, 60);
        assert!(state.take_pending_segments().is_empty());
    }

    #[test]
    fn drag_emits_connected_segments() {
        let mut state = InputState::new(Tool::Chalk);
        drag(&mut state, &[(0, 0), (10, 5), (20, 10)]);

        let segments = state.take_pending_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].segment, StrokeSegment::new(0, 0, 10, 5));
        assert_eq!(segments[1].segment, StrokeSegment::new(10, 5, 20, 10));
        assert!(segments.iter().all(|s| s.tool == Tool::Chalk));
    }

    #[test]
    fn leave_ends_stroke_and_next_gesture_starts_clean() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_mouse_press(MouseButton::Left, 0, 0);
        state.on_mouse_motion(5, 5);
        state.on_mouse_leave();
        assert_eq!(state.state, DrawingState::Idle);

        // A new gesture must not join to the old endpoint.
        state.on_mouse_press(MouseButton::Left, 100, 100);
        state.on_mouse_motion(110, 110);
        let segments = state.take_pending_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1].segment,
            StrokeSegment::new(100, 100, 110, 110)
        );
    }

    #[test]
    fn tool_switch_mid_gesture_applies_to_subsequent_segments_only() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_mouse_press(MouseButton::Left, 0, 0);
        state.on_mouse_motion(10, 0);
        state.on_key_press(Key::Char('d'));
        state.on_mouse_motion(20, 0);
        state.on_mouse_release(MouseButton::Left);

        let segments = state.take_pending_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tool, Tool::Chalk);
        assert_eq!(segments[1].tool, Tool::Duster);
    }

    #[test]
    fn touch_and_pointer_produce_identical_segment_geometry() {
        let points = [(3, 4), (13, 14), (23, 4)];

        let mut mouse = InputState::new(Tool::Chalk);
        drag(&mut mouse, &points);

        let mut touch = InputState::new(Tool::Chalk);
        touch.on_touch_down(1, points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            touch.on_touch_motion(1, x, y);
        }
        touch.on_touch_up(1);

        assert_eq!(mouse.take_pending_segments(), touch.take_pending_segments());
        assert_eq!(touch.state, DrawingState::Idle);
    }

    #[test]
    fn extra_touch_points_are_ignored_until_owner_lifts() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_touch_down(1, 0, 0);
        state.on_touch_down(2, 500, 500);
        state.on_touch_motion(2, 510, 510);
        state.on_touch_motion(1, 10, 10);
        state.on_touch_up(2);
        assert!(matches!(state.state, DrawingState::Drawing { .. }));

        let segments = state.take_pending_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].segment, StrokeSegment::new(0, 0, 10, 10));

        state.on_touch_up(1);
        assert_eq!(state.state, DrawingState::Idle);
    }

    #[test]
    fn touch_cancel_drops_the_stroke() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_touch_down(1, 0, 0);
        state.on_touch_cancel();
        assert_eq!(state.state, DrawingState::Idle);
        state.on_touch_motion(1, 10, 10);
        assert!(state.take_pending_segments().is_empty());
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_key_press(Key::Escape);
        assert!(state.should_exit);
    }

    #[test]
    fn key_presses_select_tools() {
        let mut state = InputState::new(Tool::Chalk);
        state.on_key_press(Key::Char('D'));
        assert_eq!(state.tool, Tool::Duster);
        state.on_key_press(Key::Char('c'));
        assert_eq!(state.tool, Tool::Chalk);
        state.on_key_press(Key::Unknown);
        assert_eq!(state.tool, Tool::Chalk);
    }

    #[test]
    fn dirty_regions_fall_back_to_full_surface() {
        let mut state = InputState::new(Tool::Chalk);
        state.update_screen_dimensions(640, 480);
        state.mark_full_damage();
        let regions = state.take_dirty_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(0, 0, 640, 480).unwrap());
    }
}
