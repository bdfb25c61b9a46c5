use paintapp::draw::{
    CairoSurface, RED, RenderSurface, ShapeKind, Style, WHITE, geometry::Point, render_shape,
};
use paintapp::input::{PreviewController, Tool};

fn stroke_style(line_width: f64) -> Style {
    Style {
        stroke_color: RED,
        fill_color: RED,
        line_width,
        ..Style::default()
    }
}

fn white_canvas(width: i32, height: i32) -> CairoSurface {
    let mut surface = CairoSurface::new(width, height).unwrap();
    surface.paint(WHITE);
    surface
}

/// Premultiplied BGRA for opaque red.
const RED_PIXEL: [u8; 4] = [0, 0, 255, 255];
const WHITE_PIXEL: [u8; 4] = [255, 255, 255, 255];

#[test]
fn restore_after_render_is_bit_identical() {
    let mut surface = white_canvas(120, 120);
    let before = surface.snapshot();

    for tool in Tool::ALL {
        let kind = ShapeKind::for_tool(tool, &Default::default());
        render_shape(
            &mut surface,
            kind,
            Point::new(60.0, 60.0),
            Point::new(90.0, 75.0),
            &stroke_style(3.0),
        );
        surface.restore(&before);
        assert_eq!(surface.snapshot(), before, "restore after {tool} differs");
    }
}

#[test]
fn live_preview_leaves_only_final_shape() {
    let mut controller = PreviewController::new(white_canvas(200, 200));
    controller.set_tool(Tool::Line);
    let style = stroke_style(4.0);

    controller.on_pointer_down(Point::new(20.0, 100.0));
    // The first preview frame crosses (100, 60); the committed line does not.
    controller.on_pointer_move(Point::new(180.0, 20.0), &style);
    controller.on_pointer_move(Point::new(180.0, 100.0), &style);
    controller.on_pointer_up(Point::new(180.0, 100.0), &style);

    let surface = controller.surface_mut();
    assert_eq!(surface.pixel(100, 100), Some(RED_PIXEL));
    assert_eq!(surface.pixel(100, 60), Some(WHITE_PIXEL));
}

#[test]
fn filled_circle_commits_with_release_radius() {
    let mut controller = PreviewController::new(white_canvas(200, 200));
    controller.set_tool(Tool::Circle);
    let style = Style {
        fill_enabled: true,
        ..stroke_style(1.0)
    };

    controller.on_pointer_down(Point::new(100.0, 100.0));
    controller.on_pointer_move(Point::new(100.0, 150.0), &style);
    controller.on_pointer_up(Point::new(100.0, 130.0), &style);

    let surface = controller.surface_mut();
    assert_eq!(surface.pixel(100, 100), Some(RED_PIXEL));
    assert_eq!(surface.pixel(100, 125), Some(RED_PIXEL));
    // Inside the larger preview circle, outside the committed one.
    assert_eq!(surface.pixel(100, 140), Some(WHITE_PIXEL));
}

#[test]
fn filled_rectangle_extends_up_and_left() {
    let mut controller = PreviewController::new(white_canvas(150, 150));
    controller.set_tool(Tool::Rectangle);
    let style = Style {
        fill_enabled: true,
        ..stroke_style(1.0)
    };

    controller.on_pointer_down(Point::new(100.0, 100.0));
    controller.on_pointer_up(Point::new(50.0, 50.0), &style);

    let surface = controller.surface_mut();
    assert_eq!(surface.pixel(75, 75), Some(RED_PIXEL));
    assert_eq!(surface.pixel(120, 120), Some(WHITE_PIXEL));
}

#[test]
fn semicircle_fills_lower_half_only() {
    let mut controller = PreviewController::new(white_canvas(200, 200));
    controller.set_tool(Tool::Semicircle);
    let style = Style {
        fill_enabled: true,
        ..stroke_style(1.0)
    };

    controller.on_pointer_down(Point::new(100.0, 100.0));
    controller.on_pointer_up(Point::new(140.0, 100.0), &style);

    let surface = controller.surface_mut();
    // Screen y grows downward, so the 0..π sweep covers the lower half.
    assert_eq!(surface.pixel(100, 120), Some(RED_PIXEL));
    assert_eq!(surface.pixel(100, 80), Some(WHITE_PIXEL));
}

#[test]
fn zero_length_drag_does_not_fail() {
    let mut controller = PreviewController::new(white_canvas(50, 50));
    let style = stroke_style(2.0);

    for tool in Tool::ALL {
        controller.set_tool(tool);
        controller.on_pointer_down(Point::new(25.0, 25.0));
        controller.on_pointer_move(Point::new(25.0, 25.0), &style);
        controller.on_pointer_up(Point::new(25.0, 25.0), &style);
        assert!(!controller.is_drawing());
    }
}
