//! Paint style applied to each rendered shape.

use super::color::{BLACK, Color};
use crate::util;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of stroke end points.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineCap {
    /// Flat end exactly at the end point
    Butt,
    /// Half-disc end centered on the end point
    #[default]
    Round,
    /// Flat end extended by half the line width
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Paint parameters read on every render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Color of outlines
    pub stroke_color: Color,
    /// Color used when fill is enabled
    pub fill_color: Color,
    /// Outline width in pixels
    pub line_width: f64,
    /// Fill closed shapes instead of stroking them
    pub fill_enabled: bool,
    /// Stroke end cap
    pub line_cap: LineCap,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 1.0,
            fill_enabled: false,
            line_cap: LineCap::Round,
        }
    }
}

/// Raw toolbar values as the user typed or picked them.
///
/// A single color picker drives both stroke and fill color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleInputs {
    /// Text of the line width field
    pub line_width: String,
    /// Value of the color picker
    pub color: String,
    /// State of the fill checkbox
    pub fill: bool,
}

impl StyleInputs {
    /// Converts the raw inputs into a [`Style`], keeping `defaults` for anything
    /// that does not parse.
    pub fn resolve(&self, defaults: &Style) -> Style {
        let line_width = parse_line_width(&self.line_width).unwrap_or_else(|| {
            if !self.line_width.trim().is_empty() {
                warn!(
                    "Invalid line width '{}', using {:.1}",
                    self.line_width, defaults.line_width
                );
            }
            defaults.line_width
        });

        let (stroke_color, fill_color) = match util::parse_color(&self.color) {
            Some(color) => (color, color),
            None => {
                if !self.color.trim().is_empty() {
                    warn!("Invalid color '{}', keeping current colors", self.color);
                }
                (defaults.stroke_color, defaults.fill_color)
            }
        };

        Style {
            stroke_color,
            fill_color,
            line_width,
            fill_enabled: self.fill,
            line_cap: defaults.line_cap,
        }
    }
}

/// Parses a line width field; only finite, positive numbers are accepted.
pub fn parse_line_width(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|width| width.is_finite() && *width > 0.0)
}
