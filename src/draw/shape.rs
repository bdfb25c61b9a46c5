//! Shape kinds and their dispatch onto the geometry functions.

use super::geometry::{self, Point, ShapePath};
use crate::input::Tool;
use std::f64::consts::PI;

/// Starting angle of the first triangle vertex, in radians.
pub const TRIANGLE_OFFSET: f64 = 0.65 * PI / 4.0;
/// Starting angle of the first pentagon vertex, in radians.
pub const PENTAGON_OFFSET: f64 = 1.15 * PI / 4.0;
/// Starting angle of the first hexagon vertex, in radians.
pub const HEXAGON_OFFSET: f64 = 0.65 * PI / 4.0;

/// Rotation applied to each regular polygon tool.
///
/// These are presentation constants; configuration may override them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonOffsets {
    pub triangle: f64,
    pub pentagon: f64,
    pub hexagon: f64,
}

impl Default for PolygonOffsets {
    fn default() -> Self {
        Self {
            triangle: TRIANGLE_OFFSET,
            pentagon: PENTAGON_OFFSET,
            hexagon: HEXAGON_OFFSET,
        }
    }
}

/// Geometry to build from a drag, carrying only the parameters each kind needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    /// Straight segment from the drag start to the pointer
    Line,
    /// Half disc centered on the drag start
    Semicircle,
    /// Full circle centered on the drag start
    Circle,
    /// Corner-to-corner rectangle
    Rectangle,
    /// Regular polygon centered on the drag start
    Polygon {
        /// Number of vertices
        sides: u32,
        /// Angle of the first vertex in radians
        offset: f64,
    },
}

impl ShapeKind {
    /// Resolves a tool selection into the geometry it draws.
    pub fn for_tool(tool: Tool, offsets: &PolygonOffsets) -> Self {
        match tool {
            Tool::Line => ShapeKind::Line,
            Tool::Semicircle => ShapeKind::Semicircle,
            Tool::Circle => ShapeKind::Circle,
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Triangle => ShapeKind::Polygon {
                sides: 3,
                offset: offsets.triangle,
            },
            Tool::Pentagon => ShapeKind::Polygon {
                sides: 5,
                offset: offsets.pentagon,
            },
            Tool::Hexagon => ShapeKind::Polygon {
                sides: 6,
                offset: offsets.hexagon,
            },
        }
    }

    /// Builds the path for a drag from `start` to `current`.
    pub fn path(&self, start: Point, current: Point) -> ShapePath {
        match *self {
            ShapeKind::Line => geometry::line(start, current),
            ShapeKind::Semicircle => geometry::semicircle(start, current),
            ShapeKind::Circle => geometry::circle(start, current),
            ShapeKind::Rectangle => geometry::rectangle(start, current),
            ShapeKind::Polygon { sides, offset } => {
                geometry::polygon(start, current, sides, offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::geometry::PathCommand;

    #[test]
    fn polygon_tools_map_to_side_counts() {
        let offsets = PolygonOffsets::default();
        assert_eq!(
            ShapeKind::for_tool(Tool::Triangle, &offsets),
            ShapeKind::Polygon {
                sides: 3,
                offset: TRIANGLE_OFFSET
            }
        );
        assert_eq!(
            ShapeKind::for_tool(Tool::Pentagon, &offsets),
            ShapeKind::Polygon {
                sides: 5,
                offset: PENTAGON_OFFSET
            }
        );
        assert_eq!(
            ShapeKind::for_tool(Tool::Hexagon, &offsets),
            ShapeKind::Polygon {
                sides: 6,
                offset: HEXAGON_OFFSET
            }
        );
    }

    #[test]
    fn offsets_can_be_overridden() {
        let offsets = PolygonOffsets {
            triangle: 0.0,
            ..PolygonOffsets::default()
        };
        let path = ShapeKind::for_tool(Tool::Triangle, &offsets)
            .path(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(10.0, 0.0)));
    }

    #[test]
    fn unknown_selector_draws_a_line() {
        let offsets = PolygonOffsets::default();
        let start = Point::new(1.0, 1.0);
        let end = Point::new(9.0, 4.0);
        let fallback = ShapeKind::for_tool(Tool::from_name(""), &offsets).path(start, end);
        let line = ShapeKind::Line.path(start, end);
        assert_eq!(fallback, line);
    }
}
