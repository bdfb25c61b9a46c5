//! Path construction for drag-defined shapes.
//!
//! Every function here is a pure mapping from a drag vector (the point where the
//! pointer went down and the point it is at now) to a [`ShapePath`]. Nothing is
//! drawn; the renderer replays the path onto a surface.

use crate::util::Rect;
use std::f64::consts::PI;

/// A position in surface space, relative to the surface's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Rectangle anchored at `origin` whose extents keep the sign of the drag.
///
/// A negative width or height means the rectangle extends left or up from
/// its origin. Extents are never normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignedRect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl SignedRect {
    /// Rectangle spanned by two opposite corners, anchored at `anchor`.
    pub fn spanning(anchor: Point, corner: Point) -> Self {
        Self {
            origin: anchor,
            width: corner.x - anchor.x,
            height: corner.y - anchor.y,
        }
    }

    /// The corner diagonally opposite the origin.
    pub fn far_corner(&self) -> Point {
        Point::new(self.origin.x + self.width, self.origin.y + self.height)
    }
}

/// A single path-building instruction for a raster surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc; angles in radians measured from the positive x axis.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Rect(SignedRect),
    ClosePath,
}

/// Renderable outline of one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePath {
    /// Path commands in issue order
    pub commands: Vec<PathCommand>,
    /// Region wiped to transparent before the path is drawn
    pub clear_region: Option<SignedRect>,
    /// Whether the fill toggle applies to this path (lines are always stroked)
    pub fillable: bool,
}

impl ShapePath {
    fn new(commands: Vec<PathCommand>, fillable: bool) -> Self {
        Self {
            commands,
            clear_region: None,
            fillable,
        }
    }

    /// Points visited by move/line commands, in order.
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Returns true if the last command closes the current sub-path.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    /// Pixel bounds of the path, expanded to cover a stroke of `line_width`.
    ///
    /// Arcs are bounded by their full circle. Returns `None` for an empty path.
    pub fn bounding_box(&self, line_width: f64) -> Option<Rect> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let mut include = |x: f64, y: f64| {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p.x, p.y),
                PathCommand::Arc { center, radius, .. } => {
                    include(center.x - radius, center.y - radius);
                    include(center.x + radius, center.y + radius);
                }
                PathCommand::Rect(rect) => {
                    include(rect.origin.x, rect.origin.y);
                    let corner = rect.far_corner();
                    include(corner.x, corner.y);
                }
                PathCommand::ClosePath => {}
            }
        }

        let (min_x, min_y, max_x, max_y) = bounds?;
        let padding = (line_width / 2.0).max(1.0);
        Rect::covering(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

/// Straight segment from `start` to `current`.
pub fn line(start: Point, current: Point) -> ShapePath {
    ShapePath::new(
        vec![PathCommand::MoveTo(start), PathCommand::LineTo(current)],
        false,
    )
}

/// Lower half-disc centered on `start`, closed by its diameter chord.
pub fn semicircle(start: Point, current: Point) -> ShapePath {
    ShapePath::new(
        vec![
            PathCommand::Arc {
                center: start,
                radius: start.distance_to(current),
                start_angle: 0.0,
                end_angle: PI,
                anticlockwise: false,
            },
            PathCommand::ClosePath,
        ],
        true,
    )
}

/// Full circle centered on `start` passing through `current`.
///
/// Unlike [`semicircle`] the path carries no explicit close.
pub fn circle(start: Point, current: Point) -> ShapePath {
    ShapePath::new(
        vec![PathCommand::Arc {
            center: start,
            radius: start.distance_to(current),
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            anticlockwise: false,
        }],
        true,
    )
}

/// Axis-aligned rectangle with corners at `start` and `current`.
pub fn rectangle(start: Point, current: Point) -> ShapePath {
    let rect = SignedRect::spanning(start, current);
    ShapePath {
        commands: vec![PathCommand::Rect(rect)],
        clear_region: Some(rect),
        fillable: true,
    }
}

/// Most sides a polygon is built with; beyond this it reads as a circle.
pub const MAX_POLYGON_SIDES: u32 = 256;

/// Regular polygon inscribed in the circle centered on `start` through `current`.
///
/// The first vertex sits at angle `offset`; the rest follow at equal steps of
/// `2π / sides`. The side count is clamped to `3..=MAX_POLYGON_SIDES`.
pub fn polygon(start: Point, current: Point, sides: u32, offset: f64) -> ShapePath {
    let sides = sides.clamp(3, MAX_POLYGON_SIDES);
    let radius = start.distance_to(current);
    let step = 2.0 * PI / sides as f64;

    let mut commands = Vec::with_capacity(sides as usize + 1);
    for index in 0..sides {
        let theta = offset + index as f64 * step;
        let vertex = Point::new(
            start.x + radius * theta.cos(),
            start.y + radius * theta.sin(),
        );
        commands.push(if index == 0 {
            PathCommand::MoveTo(vertex)
        } else {
            PathCommand::LineTo(vertex)
        });
    }
    commands.push(PathCommand::ClosePath);

    ShapePath::new(commands, true)
}
