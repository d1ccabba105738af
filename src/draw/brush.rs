//! Stroke segment type and the chalk/duster brush passes.
//!
//! Every pointer motion while drawing produces one [`StrokeSegment`]. A brush
//! renders a segment as an ordered sequence of cairo strokes over the same
//! path; the passes are kept as separate draw calls so each compositing-mode
//! switch stays explicit.

use super::color::WHITE;
use crate::util::Rect;
use rand::Rng;

/// Alpha used for the chalk glow underpass.
const GLOW_ALPHA: f64 = 0.35;
/// Alpha used for the duster feather pass.
const FEATHER_ALPHA: f64 = 0.4;

/// A single line segment of an in-progress stroke, in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeSegment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl StrokeSegment {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Axis-aligned bounding box of the segment, expanded by `padding` pixels
    /// on every side to cover stroke width, glow and jitter.
    pub fn bounding_box(&self, padding: f64) -> Option<Rect> {
        let pad = padding.ceil().max(1.0) as i32;
        let min_x = self.x0.min(self.x1) - pad;
        let max_x = self.x0.max(self.x1) + pad;
        let min_y = self.y0.min(self.y1) - pad;
        let max_y = self.y0.max(self.y1) + pad;
        Rect::from_min_max(min_x, min_y, max_x, max_y)
    }
}

/// Chalk brush parameters.
///
/// The defaults reproduce a thin classroom chalk line: a 2px white body with
/// a 1px soft glow and a jittered 1px grain pass on top.
#[derive(Debug, Clone, Copy)]
pub struct ChalkStyle {
    /// Body stroke width in pixels.
    pub width: f64,
    /// Glow radius; the glow underpass is stroked at `width + 2 * glow_radius`.
    pub glow_radius: f64,
    /// Alpha of the 1px grain pass.
    pub texture_alpha: f64,
    /// Maximum per-axis endpoint offset of the grain pass, in pixels.
    pub jitter: f64,
}

impl Default for ChalkStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            glow_radius: 1.0,
            texture_alpha: 0.4,
            jitter: 1.0,
        }
    }
}

impl ChalkStyle {
    /// Widest reach of any chalk pass from the segment path, for dirty
    /// tracking.
    pub fn max_extent(&self) -> f64 {
        (self.width / 2.0 + self.glow_radius).max(0.5 + self.jitter) + 1.0
    }
}

/// Duster (eraser) brush parameters.
///
/// Defaults give a 40px cut with a 10px feathered edge, followed by a very
/// faint white residue so the wipe never looks perfectly clean.
#[derive(Debug, Clone, Copy)]
pub struct DusterStyle {
    /// Width of the destructive cut pass in pixels.
    pub width: f64,
    /// Feather radius; the feather pass is stroked at `width + 2 * feather`.
    pub feather: f64,
    /// Width of the residue pass in pixels.
    pub residue_width: f64,
    /// Alpha of the white residue pass.
    pub residue_alpha: f64,
}

impl Default for DusterStyle {
    fn default() -> Self {
        Self {
            width: 40.0,
            feather: 10.0,
            residue_width: 35.0,
            residue_alpha: 0.05,
        }
    }
}

impl DusterStyle {
    /// Widest reach of any duster pass from the segment path.
    pub fn max_extent(&self) -> f64 {
        (self.width / 2.0 + self.feather).max(self.residue_width / 2.0) + 1.0
    }
}

fn segment_path(ctx: &cairo::Context, x0: f64, y0: f64, x1: f64, y1: f64) {
    ctx.new_path();
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
}

fn round_stroke_setup(ctx: &cairo::Context) {
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Paints one chalk segment: glow underpass, solid body, jittered grain.
///
/// The grain offsets are drawn from `rng` per call, so repeating the same
/// segment never yields pixel-identical texture. Jitter is visual only.
pub fn chalk_passes<R: Rng + ?Sized>(
    ctx: &cairo::Context,
    segment: &StrokeSegment,
    style: &ChalkStyle,
    rng: &mut R,
) {
    let (x0, y0) = (segment.x0 as f64, segment.y0 as f64);
    let (x1, y1) = (segment.x1 as f64, segment.y1 as f64);

    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Over);
    round_stroke_setup(ctx);

    // Pass 1: soft glow. Cairo has no shadow blur, so the glow is a wider
    // low-alpha stroke beneath the body.
    if style.glow_radius > 0.0 {
        segment_path(ctx, x0, y0, x1, y1);
        ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, GLOW_ALPHA);
        ctx.set_line_width(style.width + style.glow_radius * 2.0);
        let _ = ctx.stroke();
    }

    // Pass 2: solid white body.
    segment_path(ctx, x0, y0, x1, y1);
    ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, WHITE.a);
    ctx.set_line_width(style.width);
    let _ = ctx.stroke();

    // Pass 3: grain. A thin semi-transparent stroke with both endpoints
    // nudged by a fresh random offset of at most `jitter` per axis.
    let j = style.jitter;
    let mut jittered = |v: f64| {
        if j > 0.0 {
            v + rng.random_range(-j..=j)
        } else {
            v
        }
    };
    segment_path(ctx, jittered(x0), jittered(y0), jittered(x1), jittered(y1));
    ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, style.texture_alpha);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();

    ctx.restore().ok();
}

/// Paints one duster segment: feathered cut first, residue film second.
///
/// The destructive passes use `DestOut` so they subtract alpha from the board
/// rather than painting over it; the residue pass switches back to `Over`.
/// Pass order matters and must not be reordered.
pub fn duster_passes(ctx: &cairo::Context, segment: &StrokeSegment, style: &DusterStyle) {
    let (x0, y0) = (segment.x0 as f64, segment.y0 as f64);
    let (x1, y1) = (segment.x1 as f64, segment.y1 as f64);

    ctx.save().ok();
    round_stroke_setup(ctx);

    // Pass 1: feathered edge of the cut.
    ctx.set_operator(cairo::Operator::DestOut);
    if style.feather > 0.0 {
        segment_path(ctx, x0, y0, x1, y1);
        ctx.set_source_rgba(0.0, 0.0, 0.0, FEATHER_ALPHA);
        ctx.set_line_width(style.width + style.feather * 2.0);
        let _ = ctx.stroke();
    }

    // Pass 2: full-strength cut.
    segment_path(ctx, x0, y0, x1, y1);
    ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    ctx.set_line_width(style.width);
    let _ = ctx.stroke();

    // Pass 3: chalk-dust residue left behind by the wipe.
    ctx.set_operator(cairo::Operator::Over);
    segment_path(ctx, x0, y0, x1, y1);
    ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, style.residue_alpha);
    ctx.set_line_width(style.residue_width);
    let _ = ctx.stroke();

    ctx.restore().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_expands_with_padding() {
        let segment = StrokeSegment::new(10, 20, 30, 25);
        let rect = segment.bounding_box(4.0).expect("segment should have bounds");
        assert_eq!(rect.x, 6);
        assert_eq!(rect.y, 16);
        assert_eq!(rect.width, 28);
        assert_eq!(rect.height, 17);
    }

    #[test]
    fn bounding_box_handles_degenerate_segments() {
        let segment = StrokeSegment::new(5, 5, 5, 5);
        let rect = segment.bounding_box(2.0).expect("point segment still pads");
        assert_eq!(rect.width, 4);
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn chalk_extent_covers_glow_and_jitter() {
        let style = ChalkStyle::default();
        // body 2px + glow 1px: reach 2.0; grain 0.5 + jitter 1.0: reach 1.5
        assert!((style.max_extent() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duster_extent_covers_feather() {
        let style = DusterStyle::default();
        assert!((style.max_extent() - 31.0).abs() < f64::EPSILON);
    }
}
