//! Utility functions for color parsing and pixel rectangles.
//!
//! This module provides:
//! - Color name and hex string parsing for toolbar and config input
//! - A pixel-aligned [`Rect`] used for shape bounds

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the style inputs to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a color picker value.
///
/// Accepts `#rrggbb`, `#rgb` (the forms an HTML color input produces) and
/// any name understood by [`name_to_color`]. Surrounding whitespace is ignored.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    match value.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => name_to_color(value),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(Color::from_rgb8(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned pixel rectangle used for shape bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds the smallest rectangle covering the given float bounds.
    ///
    /// Bounds beyond the `i32` range saturate, so a very long drag still
    /// yields a rectangle that reaches the edge of pixel space.
    pub fn covering(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        let (x, width) = covering_span(min_x, max_x)?;
        let (y, height) = covering_span(min_y, max_y)?;
        Self::new(x, y, width, height)
    }
}

/// Pixel start and length covering `[min, max]`, at least one pixel long.
fn covering_span(min: f64, max: f64) -> Option<(i32, i32)> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return None;
    }
    let limit = |v: f64| v.clamp(i32::MIN as f64, i32::MAX as f64) as i64;
    let start = limit(min.floor());
    let end = limit(max.ceil());
    let length = (end - start).clamp(1, i32::MAX as i64);
    Some((start as i32, length as i32))
}
