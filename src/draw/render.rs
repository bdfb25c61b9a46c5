//! Replays shape paths onto a [`RenderSurface`].

use super::geometry::{PathCommand, Point, ShapePath};
use super::shape::ShapeKind;
use super::style::Style;
use super::surface::RenderSurface;

/// Renders one shape for a drag from `start` to `current`.
///
/// # Arguments
/// * `surface` - Raster target to draw on
/// * `kind` - Geometry to build
/// * `start` - Point where the drag began
/// * `current` - Current (or release) pointer position
/// * `style` - Paint parameters, read fresh for this frame
pub fn render_shape<S: RenderSurface + ?Sized>(
    surface: &mut S,
    kind: ShapeKind,
    start: Point,
    current: Point,
    style: &Style,
) {
    let path = kind.path(start, current);
    render_path(surface, &path, style);
}

/// Issues a path onto the surface, then fills or strokes it.
///
/// The path is filled with `style.fill_color` when fill is enabled and the
/// path is fillable; every other case strokes it with the stroke settings.
pub fn render_path<S: RenderSurface + ?Sized>(surface: &mut S, path: &ShapePath, style: &Style) {
    if let Some(region) = path.clear_region {
        surface.clear_rect(region);
    }

    surface.begin_path();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(point) => surface.move_to(point),
            PathCommand::LineTo(point) => surface.line_to(point),
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => surface.arc(center, radius, start_angle, end_angle, anticlockwise),
            PathCommand::Rect(rect) => surface.rect(rect),
            PathCommand::ClosePath => surface.close_path(),
        }
    }

    if style.fill_enabled && path.fillable {
        surface.fill(style.fill_color);
    } else {
        surface.stroke(style.stroke_color, style.line_width, style.line_cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::recording::{DrawCall, RecordingSurface};
    use crate::draw::style::LineCap;

    fn style(fill_enabled: bool) -> Style {
        Style {
            stroke_color: RED,
            fill_color: BLUE,
            line_width: 5.0,
            fill_enabled,
            line_cap: LineCap::Round,
        }
    }

    #[test]
    fn lines_are_stroked_even_with_fill_enabled() {
        let mut surface = RecordingSurface::new(100, 100);
        render_shape(
            &mut surface,
            ShapeKind::Line,
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            &style(true),
        );
        assert_eq!(
            surface.calls().last(),
            Some(&DrawCall::Stroke {
                color: RED,
                line_width: 5.0,
                line_cap: LineCap::Round
            })
        );
    }

    #[test]
    fn closed_shapes_fill_with_fill_color() {
        let mut surface = RecordingSurface::new(100, 100);
        render_shape(
            &mut surface,
            ShapeKind::Circle,
            Point::new(50.0, 50.0),
            Point::new(60.0, 50.0),
            &style(true),
        );
        assert_eq!(surface.calls().last(), Some(&DrawCall::Fill { color: BLUE }));
    }

    #[test]
    fn rectangle_clears_before_building_path() {
        let mut surface = RecordingSurface::new(100, 100);
        render_shape(
            &mut surface,
            ShapeKind::Rectangle,
            Point::new(100.0, 100.0),
            Point::new(50.0, 50.0),
            &style(false),
        );
        let calls = surface.calls();
        assert!(matches!(calls[0], DrawCall::ClearRect(_)));
        assert_eq!(calls[1], DrawCall::BeginPath);
        assert!(matches!(calls[2], DrawCall::Rect(r) if r.width == -50.0 && r.height == -50.0));
    }

    #[test]
    fn polygon_replays_vertices_and_close() {
        let mut surface = RecordingSurface::new(100, 100);
        render_shape(
            &mut surface,
            ShapeKind::Polygon {
                sides: 5,
                offset: 0.0,
            },
            Point::new(50.0, 50.0),
            Point::new(70.0, 50.0),
            &style(false),
        );
        let calls = surface.calls();
        let moves = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::MoveTo(_)))
            .count();
        let lines = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::LineTo(_)))
            .count();
        assert_eq!((moves, lines), (1, 4));
        assert!(calls.contains(&DrawCall::ClosePath));
    }
}
