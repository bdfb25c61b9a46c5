//! Raster drawing surfaces and pixel snapshots.

use super::color::Color;
use super::geometry::{Point, SignedRect};
use super::style::LineCap;
use log::{debug, warn};
use std::io::Write;
use thiserror::Error;

/// Errors raised while creating or exporting a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Full copy of a surface's pixel buffer at one point in time.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    width: i32,
    height: i32,
    stride: i32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for RasterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// A 2D raster target that shapes are drawn onto.
///
/// Path methods accumulate a path; `fill` and `stroke` paint and consume it.
/// `clear_rect` wipes pixels directly and discards any pending path.
pub trait RenderSurface {
    /// Opaque capture of the pixel buffer.
    type Snapshot;

    /// Surface width in pixels.
    fn width(&self) -> i32;
    /// Surface height in pixels.
    fn height(&self) -> i32;

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Adds a circular arc; `anticlockwise` selects the sweep direction.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    /// Adds a closed rectangle sub-path; negative extents are honoured as-is.
    fn rect(&mut self, rect: SignedRect);
    fn close_path(&mut self);

    /// Sets every pixel inside `rect` to transparent.
    fn clear_rect(&mut self, rect: SignedRect);
    /// Replaces every pixel of the surface with `color`.
    fn paint(&mut self, color: Color);

    /// Fills the current path with `color`.
    fn fill(&mut self, color: Color);
    /// Strokes the current path.
    fn stroke(&mut self, color: Color, line_width: f64, line_cap: LineCap);

    /// Captures the whole pixel buffer.
    fn snapshot(&mut self) -> Self::Snapshot;
    /// Writes a previously captured buffer back onto the surface.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// [`RenderSurface`] backed by a Cairo ARGB32 image surface.
///
/// The drawing context is created lazily and dropped whenever the pixel
/// buffer is accessed directly, since Cairo only hands out the buffer to an
/// exclusive owner.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
    ctx: Option<cairo::Context>,
}

impl CairoSurface {
    /// Creates a transparent surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        debug!("Created {}x{} raster surface", width, height);
        Ok(Self { surface, ctx: None })
    }

    fn ctx(&mut self) -> Option<&cairo::Context> {
        if self.ctx.is_none() {
            match cairo::Context::new(&self.surface) {
                Ok(ctx) => {
                    ctx.set_antialias(cairo::Antialias::Best);
                    self.ctx = Some(ctx);
                }
                Err(err) => {
                    warn!("Failed to create drawing context: {}", err);
                    return None;
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Returns the premultiplied BGRA bytes of one pixel, in memory order.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.ctx = None;
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        Some([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    /// Encodes the surface as PNG into `writer`.
    pub fn write_png<W: Write>(&mut self, writer: &mut W) -> Result<(), SurfaceError> {
        self.ctx = None;
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}

impl RenderSurface for CairoSurface {
    type Snapshot = RasterSnapshot;

    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }

    fn begin_path(&mut self) {
        if let Some(ctx) = self.ctx() {
            ctx.new_path();
        }
    }

    fn move_to(&mut self, point: Point) {
        if let Some(ctx) = self.ctx() {
            ctx.move_to(point.x, point.y);
        }
    }

    fn line_to(&mut self, point: Point) {
        if let Some(ctx) = self.ctx() {
            ctx.line_to(point.x, point.y);
        }
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        if let Some(ctx) = self.ctx() {
            if anticlockwise {
                ctx.arc_negative(center.x, center.y, radius, start_angle, end_angle);
            } else {
                ctx.arc(center.x, center.y, radius, start_angle, end_angle);
            }
        }
    }

    fn rect(&mut self, rect: SignedRect) {
        if let Some(ctx) = self.ctx() {
            ctx.rectangle(rect.origin.x, rect.origin.y, rect.width, rect.height);
        }
    }

    fn close_path(&mut self) {
        if let Some(ctx) = self.ctx() {
            ctx.close_path();
        }
    }

    fn clear_rect(&mut self, rect: SignedRect) {
        if let Some(ctx) = self.ctx() {
            let _ = ctx.save();
            ctx.new_path();
            ctx.set_operator(cairo::Operator::Clear);
            ctx.rectangle(rect.origin.x, rect.origin.y, rect.width, rect.height);
            let _ = ctx.fill();
            let _ = ctx.restore();
        }
    }

    fn paint(&mut self, color: Color) {
        if let Some(ctx) = self.ctx() {
            let _ = ctx.save();
            ctx.set_operator(cairo::Operator::Source);
            color.apply(ctx);
            let _ = ctx.paint();
            let _ = ctx.restore();
        }
    }

    fn fill(&mut self, color: Color) {
        if let Some(ctx) = self.ctx() {
            color.apply(ctx);
            let _ = ctx.fill(); // A failed fill leaves the raster unchanged
        }
    }

    fn stroke(&mut self, color: Color, line_width: f64, line_cap: LineCap) {
        if let Some(ctx) = self.ctx() {
            color.apply(ctx);
            ctx.set_line_width(line_width);
            ctx.set_line_cap(line_cap.into());
            ctx.set_line_join(cairo::LineJoin::Miter);
            let _ = ctx.stroke();
        }
    }

    fn snapshot(&mut self) -> RasterSnapshot {
        self.ctx = None;
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = self.surface.stride();
        let pixels = match self.surface.data() {
            Ok(data) => data.to_vec(),
            Err(err) => {
                warn!("Failed to read raster for snapshot: {}", err);
                Vec::new()
            }
        };
        RasterSnapshot {
            width,
            height,
            stride,
            pixels,
        }
    }

    fn restore(&mut self, snapshot: &RasterSnapshot) {
        self.ctx = None;
        if snapshot.width != self.surface.width()
            || snapshot.height != self.surface.height()
            || snapshot.stride != self.surface.stride()
        {
            warn!(
                "Ignoring {}x{} snapshot for {}x{} surface",
                snapshot.width,
                snapshot.height,
                self.surface.width(),
                self.surface.height()
            );
            return;
        }
        match self.surface.data() {
            Ok(mut data) if data.len() == snapshot.pixels.len() => {
                data.copy_from_slice(&snapshot.pixels);
            }
            Ok(_) => warn!("Snapshot buffer size mismatch; not restoring"),
            Err(err) => warn!("Failed to write raster from snapshot: {}", err),
        }
    }
}
