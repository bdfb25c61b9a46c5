//! In-memory surface that records draw calls instead of rasterizing them.

use super::color::Color;
use super::geometry::{Point, SignedRect};
use super::style::LineCap;
use super::surface::RenderSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Rect(SignedRect),
    ClosePath,
    ClearRect(SignedRect),
    Paint(Color),
    Fill {
        color: Color,
    },
    Stroke {
        color: Color,
        line_width: f64,
        line_cap: LineCap,
    },
}

/// Surface whose "pixels" are the list of calls drawn onto it.
///
/// Snapshots copy the list, so restoring one discards every call made since.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
    pub snapshots_taken: usize,
    pub restores: usize,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Arcs currently on the surface.
    pub fn arcs(&self) -> Vec<(Point, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                DrawCall::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => Some((center, radius, start_angle, end_angle)),
                _ => None,
            })
            .collect()
    }

    /// Number of fill or stroke operations currently on the surface.
    pub fn paint_ops(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Fill { .. } | DrawCall::Stroke { .. }))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    type Snapshot = Vec<DrawCall>;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn rect(&mut self, rect: SignedRect) {
        self.calls.push(DrawCall::Rect(rect));
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn clear_rect(&mut self, rect: SignedRect) {
        self.calls.push(DrawCall::ClearRect(rect));
    }

    fn paint(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Paint(color));
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill { color });
    }

    fn stroke(&mut self, color: Color, line_width: f64, line_cap: LineCap) {
        self.calls.push(DrawCall::Stroke {
            color,
            line_width,
            line_cap,
        });
    }

    fn snapshot(&mut self) -> Vec<DrawCall> {
        self.snapshots_taken += 1;
        self.calls.clone()
    }

    fn restore(&mut self, snapshot: &Vec<DrawCall>) {
        self.restores += 1;
        self.calls = snapshot.clone();
    }
}
