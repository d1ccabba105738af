use cairo::{Context, ImageSurface};
use chalkboard::config::{StatusBarStyle, StatusPosition};
use chalkboard::input::Tool;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let style = StatusBarStyle::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        chalkboard::ui::render_status_bar(&ctx, Tool::Chalk, position, &style, 400, 200);
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn render_status_bar_draws_for_both_tools() {
    let style = StatusBarStyle::default();

    for tool in [Tool::Chalk, Tool::Duster] {
        let (mut surface, ctx) = surface_with_context(400, 200);
        chalkboard::ui::render_status_bar(
            &ctx,
            tool,
            StatusPosition::BottomLeft,
            &style,
            400,
            200,
        );
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {}",
            tool
        );
    }
}
