// Live Wayland protocol state shared by the backend loop and the handler
// modules; owns the board raster and the per-frame render path.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::{Board, ChalkStyle, Color, DusterStyle},
    input::InputState,
    util::Rect,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,

    // Persistent stroke raster, created on first configure
    pub(super) board: Option<Board>,

    // Brush styles and background, derived from config at startup
    chalk_style: ChalkStyle,
    duster_style: DusterStyle,
    background: Color,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        let chalk_style = config.chalk.style();
        let duster_style = config.duster.style();
        let background = config.board.background.to_color();
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            input_state,
            board: None,
            chalk_style,
            duster_style,
            background,
        }
    }

    /// Creates or resizes the board raster to match the configured surface.
    ///
    /// Resizing recreates the raster, so drawn content is discarded. When the
    /// board cannot be (re)created the slot is left empty and painting
    /// becomes a silent no-op until the next configure.
    pub(super) fn ensure_board(&mut self, width: u32, height: u32) {
        let (w, h) = (width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
        match self.board.as_mut() {
            Some(board) => {
                if let Err(e) = board.resize(w, h) {
                    log::warn!("Failed to resize board raster: {}", e);
                    self.board = None;
                }
            }
            None => match Board::new(w, h) {
                Ok(board) => self.board = Some(board),
                Err(e) => log::warn!("Failed to create board raster: {}", e),
            },
        }
        self.input_state.mark_full_damage();
    }

    /// Paints queued stroke segments into the board raster.
    ///
    /// Each segment uses the brush of the tool that was active when it was
    /// emitted. Before the first configure there is no board, so the queue is
    /// drained and dropped.
    fn apply_pending_segments(&mut self) {
        let pending = self.input_state.take_pending_segments();
        if pending.is_empty() {
            return;
        }
        if self.board.is_none() {
            debug!("Dropping {} segments emitted before first configure", pending.len());
            return;
        }

        let mut rng = rand::rng();
        for item in pending {
            let painted = match self.board.as_mut() {
                Some(board) => board.paint(
                    &item.segment,
                    item.tool,
                    &self.chalk_style,
                    &self.duster_style,
                    &mut rng,
                ),
                None => break,
            };
            match painted {
                Ok(rect) => self.input_state.mark_dirty(rect),
                Err(e) => log::warn!("Failed to paint {} segment: {}", item.tool, e),
            }
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        self.apply_pending_segments();

        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: The Cairo surface borrows raw memory from the slot pool.
        // Invariants upheld here:
        // 1. `canvas` is a mutable slice of exactly (width * height * 4) bytes
        // 2. ARgb32 matches the Argb8888 buffer layout (4 bytes per pixel)
        // 3. The stride (width * 4) is the true byte length of one row
        // 4. `cairo_surface` and `ctx` are dropped before the buffer is
        //    attached, so Cairo never touches memory the compositor owns
        // 5. No other reference to the slice exists while Cairo holds it
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Fill the opaque board background, then composite the stroke raster
        // over it. The raster alone stays transparent where nothing has been
        // drawn, which is what lets duster cuts reveal the background.
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        );
        ctx.paint().context("Failed to paint background")?;
        ctx.set_operator(cairo::Operator::Over);

        if let Some(board) = &self.board {
            board
                .composite_onto(&ctx)
                .context("Failed to composite board raster")?;
        }

        if self.config.ui.show_status_bar {
            crate::ui::render_status_bar(
                &ctx,
                self.input_state.tool,
                self.config.ui.status_bar_position,
                &self.config.ui.status_bar_style,
                width,
                height,
            );
        }

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;

        let dirty_regions = resolve_damage_regions(
            surface_width,
            surface_height,
            self.input_state.take_dirty_regions(),
        );

        for rect in &dirty_regions {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty()
        && width > 0
        && height > 0
        && let Some(full) = Rect::new(0, 0, width, height)
    {
        regions.push(full);
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(1920, 1080, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 1920, 1080).unwrap()]);
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect::new(10, 10, 50, 40).unwrap(),
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(10, 10, 50, 40).unwrap()]);
    }

    #[test]
    fn resolve_damage_preserves_existing_regions() {
        let regions = resolve_damage_regions(800, 600, vec![Rect::new(5, 5, 20, 30).unwrap()]);
        assert_eq!(regions, vec![Rect::new(5, 5, 20, 30).unwrap()]);
    }
}
