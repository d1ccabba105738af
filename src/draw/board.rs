//! The persistent board raster that strokes are painted into.
//!
//! The board is a single ARGB cairo image surface that outlives individual
//! frames: chalk adds pixels, the duster subtracts them, and nothing else
//! touches the buffer. Each commit composites the board over the background
//! fill, so erasing reveals the board color rather than leaving holes.

use super::brush::{self, ChalkStyle, DusterStyle, StrokeSegment};
use crate::input::Tool;
use crate::util::Rect;
use log::info;
use thiserror::Error;

/// Errors produced by board raster operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Requested dimensions cannot back a raster surface.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    /// Cairo failed to create or draw on the surface.
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Persistent stroke raster sized to the displayed surface.
pub struct Board {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Board {
    /// Creates an empty (fully transparent) board of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Board width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Resizes the raster to match the displayed dimensions.
    ///
    /// Recreating the backing surface discards everything drawn so far. That
    /// content loss is an accepted consequence of resizing a raster surface,
    /// not a bug; callers should treat it as full damage.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), BoardError> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidSize { width, height });
        }
        info!(
            "Resizing board {}x{} -> {}x{} (drawn content is discarded)",
            self.width, self.height, width, height
        );
        self.surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Paints one stroke segment with the brush belonging to `tool`.
    ///
    /// Returns the damaged rectangle, or `None` when the segment's padded
    /// bounds degenerate. Coordinates outside the raster are painted as-is;
    /// cairo clips them silently.
    pub fn paint<R: rand::Rng + ?Sized>(
        &mut self,
        segment: &StrokeSegment,
        tool: Tool,
        chalk: &ChalkStyle,
        duster: &DusterStyle,
        rng: &mut R,
    ) -> Result<Option<Rect>, BoardError> {
        let ctx = cairo::Context::new(&self.surface)?;
        let extent = match tool {
            Tool::Chalk => {
                brush::chalk_passes(&ctx, segment, chalk, rng);
                chalk.max_extent()
            }
            Tool::Duster => {
                brush::duster_passes(&ctx, segment, duster);
                duster.max_extent()
            }
        };
        drop(ctx);
        self.surface.flush();
        Ok(segment.bounding_box(extent))
    }

    /// Composites the stroke raster onto `ctx` at the origin.
    pub fn composite_onto(&self, ctx: &cairo::Context) -> Result<(), BoardError> {
        ctx.save()?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
        ctx.paint()?;
        ctx.restore()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> &mut cairo::ImageSurface {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Reads the alpha channel of one pixel. Pixels are native-endian u32s in
    /// ARGB order, so alpha is always the top byte of the integer.
    fn pixel_alpha(board: &mut Board, x: i32, y: i32) -> u8 {
        let surface = board.surface_mut();
        let stride = surface.stride();
        let data = surface.data().expect("board surface data");
        let offset = (y * stride + x * 4) as usize;
        let px = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
        (px >> 24) as u8
    }

    /// Counts pixels in a rectangle whose alpha exceeds `threshold`.
    fn coverage_above(board: &mut Board, rect: Rect, threshold: u8) -> usize {
        let mut count = 0;
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if pixel_alpha(board, x, y) > threshold {
                    count += 1;
                }
            }
        }
        count
    }

    fn chalk_line(board: &mut Board, y: i32) {
        let segment = StrokeSegment::new(10, y, 90, y);
        board
            .paint(
                &segment,
                Tool::Chalk,
                &ChalkStyle::default(),
                &DusterStyle::default(),
                &mut rng(),
            )
            .unwrap();
    }

    #[test]
    fn new_board_is_fully_transparent() {
        let mut board = Board::new(64, 64).unwrap();
        let full = Rect::new(0, 0, 64, 64).unwrap();
        assert_eq!(coverage_above(&mut board, full, 0), 0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(matches!(
            Board::new(0, 32),
            Err(BoardError::InvalidSize { .. })
        ));
        let mut board = Board::new(32, 32).unwrap();
        assert!(board.resize(32, -1).is_err());
    }

    #[test]
    fn chalk_segment_leaves_solid_body_and_soft_surround() {
        let mut board = Board::new(100, 100).unwrap();
        chalk_line(&mut board, 50);

        // On the path: the 2px body is solid white.
        assert_eq!(pixel_alpha(&mut board, 50, 50), 255);

        // 1px off the path: inside the glow but outside the body core, so
        // painted yet not fully opaque.
        let near = pixel_alpha(&mut board, 50, 48);
        assert!(near > 0, "glow should reach 2px from the path");
        assert!(near < 255, "glow must stay semi-transparent");
    }

    #[test]
    fn duster_strictly_decreases_coverage() {
        let mut board = Board::new(100, 100).unwrap();
        for y in [46, 48, 50, 52, 54] {
            chalk_line(&mut board, y);
        }

        let band = Rect::new(20, 40, 60, 20).unwrap();
        let before = coverage_above(&mut board, band, 200);
        assert!(before > 0, "chalk lines should mark the band");

        let wipe = StrokeSegment::new(10, 50, 90, 50);
        board
            .paint(
                &wipe,
                Tool::Duster,
                &ChalkStyle::default(),
                &DusterStyle::default(),
                &mut rng(),
            )
            .unwrap();

        let after = coverage_above(&mut board, band, 200);
        assert!(
            after < before,
            "erasing must strictly reduce solid coverage ({before} -> {after})"
        );
    }

    #[test]
    fn duster_leaves_faint_residue_film() {
        let mut board = Board::new(100, 100).unwrap();
        let wipe = StrokeSegment::new(10, 50, 90, 50);
        board
            .paint(
                &wipe,
                Tool::Duster,
                &ChalkStyle::default(),
                &DusterStyle::default(),
                &mut rng(),
            )
            .unwrap();

        let alpha = pixel_alpha(&mut board, 50, 50);
        assert!(alpha > 0, "residue pass should deposit a faint film");
        assert!(alpha < 40, "residue must stay nearly transparent");
    }

    #[test]
    fn resize_matches_new_dimensions_and_discards_strokes() {
        let mut board = Board::new(100, 100).unwrap();
        chalk_line(&mut board, 50);
        board.resize(120, 80).unwrap();

        assert_eq!(board.width(), 120);
        assert_eq!(board.height(), 80);
        let full = Rect::new(0, 0, 120, 80).unwrap();
        assert_eq!(
            coverage_above(&mut board, full, 0),
            0,
            "resizing a raster discards prior strokes"
        );
    }

    #[test]
    fn out_of_bounds_segments_are_clipped_not_errors() {
        let mut board = Board::new(50, 50).unwrap();
        let segment = StrokeSegment::new(-40, -40, -10, -10);
        let rect = board
            .paint(
                &segment,
                Tool::Chalk,
                &ChalkStyle::default(),
                &DusterStyle::default(),
                &mut rng(),
            )
            .unwrap();
        // The damage rect reflects the requested geometry even off-surface.
        assert!(rect.is_some());
        let full = Rect::new(0, 0, 50, 50).unwrap();
        assert_eq!(coverage_above(&mut board, full, 0), 0);
    }
}
