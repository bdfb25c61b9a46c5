//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::LineCap;
use crate::draw::shape::{HEXAGON_OFFSET, PENTAGON_OFFSET, TRIANGLE_OFFSET};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the toolbar state when the paint tool first opens. The toolbar
/// can change every value at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a named color, a `#rrggbb` string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default fill color used when fill is enabled
    #[serde(default = "default_color")]
    pub default_fill_color: ColorSpec,

    /// Default line width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Stroke end cap (butt, round, square)
    #[serde(default)]
    pub line_cap: LineCap,

    /// Whether closed shapes start out filled
    #[serde(default)]
    pub fill_enabled: bool,

    /// Tool selected at startup (line, semicircle, circle, triangle,
    /// rectangle, pentagon, hexagon); unknown names select line
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_fill_color: default_color(),
            default_line_width: default_line_width(),
            line_cap: LineCap::default(),
            fill_enabled: false,
            default_tool: default_tool(),
        }
    }
}

/// Raster surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Color the surface starts with; omit for a transparent canvas
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

/// Rotation of the regular polygon tools, in radians.
///
/// The angle places the first vertex; the defaults orient each polygon the
/// way the tool palette icons show it.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PolygonConfig {
    #[serde(default = "default_triangle_offset")]
    pub triangle_offset: f64,

    #[serde(default = "default_pentagon_offset")]
    pub pentagon_offset: f64,

    #[serde(default = "default_hexagon_offset")]
    pub hexagon_offset: f64,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            triangle_offset: default_triangle_offset(),
            pentagon_offset: default_pentagon_offset(),
            hexagon_offset: default_hexagon_offset(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to. Defaults to
    /// `<Pictures>/PaintApp`, or the working directory when no pictures
    /// directory is known.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Filename template (chrono format specifiers, no extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    1.0
}

fn default_tool() -> String {
    "line".to_string()
}

fn default_canvas_width() -> i32 {
    800
}

fn default_canvas_height() -> i32 {
    600
}

fn default_triangle_offset() -> f64 {
    TRIANGLE_OFFSET
}

fn default_pentagon_offset() -> f64 {
    PENTAGON_OFFSET
}

fn default_hexagon_offset() -> f64 {
    HEXAGON_OFFSET
}

fn default_filename_template() -> String {
    "painting_%Y-%m-%d_%H%M%S".to_string()
}
