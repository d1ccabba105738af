/// UI rendering: the status bar naming the active tool and key hints.
use crate::config::{StatusBarStyle, StatusPosition};
use crate::input::Tool;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Side length of the tool swatch square
const STATUS_SWATCH_SIZE: f64 = 9.0;
/// Gap between the swatch and the text
const STATUS_SWATCH_GAP: f64 = 7.0;

/// Renders the status bar showing the active tool and key hints.
///
/// Mirrors the tool tray of a physical chalkboard: a small swatch (white for
/// chalk, felt-brown for the duster) next to the active tool name.
pub fn render_status_bar(
    ctx: &cairo::Context,
    tool: Tool,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = format!("[{tool}]  C=Chalk  D=Duster  Esc=Exit");

    // Set font
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    // Measure text
    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return; // Gracefully skip rendering if font measurement fails
        }
    };
    let text_width = extents.width();
    let text_height = extents.height();

    // Calculate position using configurable padding
    let padding = style.padding;
    let swatch_span = STATUS_SWATCH_SIZE + STATUS_SWATCH_GAP;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding + swatch_span, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding + swatch_span, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - padding,
            screen_height as f64 - padding,
        ),
    };

    // Draw semi-transparent background
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - swatch_span - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + swatch_span + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Draw the tool swatch: white chalk stick or felt-brown duster block.
    let (sr, sg, sb) = match tool {
        Tool::Chalk => (0.95, 0.95, 0.95),
        Tool::Duster => (0.3, 0.2, 0.17),
    };
    ctx.set_source_rgba(sr, sg, sb, 1.0);
    ctx.rectangle(
        x - swatch_span,
        y - text_height / 2.0 - STATUS_SWATCH_SIZE / 2.0,
        STATUS_SWATCH_SIZE,
        STATUS_SWATCH_SIZE,
    );
    let _ = ctx.fill();

    // Draw text
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    let _ = ctx.show_text(&status_text);
}
