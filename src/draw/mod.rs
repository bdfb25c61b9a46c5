//! Rendering primitives and shape geometry (Cairo-based).
//!
//! This module defines the core drawing types used by the paint tool:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`geometry`]: pure path construction from a drag vector
//! - [`ShapeKind`]: the shape a tool draws, dispatched onto the geometry
//! - [`Style`]: stroke/fill parameters passed into every render call
//! - [`RenderSurface`]: the raster target, with a Cairo implementation

pub mod color;
pub mod geometry;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

#[cfg(test)]
pub(crate) mod recording;

// Re-export commonly used types at module level
pub use color::Color;
pub use geometry::{PathCommand, Point, ShapePath, SignedRect};
pub use render::{render_path, render_shape};
pub use shape::{PolygonOffsets, ShapeKind};
pub use style::{LineCap, Style, StyleInputs};
pub use surface::{CairoSurface, RasterSnapshot, RenderSurface, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
