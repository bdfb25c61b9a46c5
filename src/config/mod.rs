//! Configuration file support for paintapp.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintapp/config.toml`. Settings include toolbar defaults,
//! canvas size, polygon orientation, and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, PolygonConfig};

use crate::draw::{Color, PolygonOffsets, Style, TRANSPARENT};
use crate::input::Tool;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e90ff"
/// default_line_width = 3.0
/// fill_enabled = false
/// default_tool = "circle"
///
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [export]
/// filename_template = "sketch_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Toolbar defaults (colors, line width, fill, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Raster surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Regular polygon orientation
    #[serde(default)]
    pub polygon: PolygonConfig,

    /// Image export location and naming
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_line_width`: 1.0 - 50.0
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - polygon offsets: finite values only
    fn validate_and_clamp(&mut self) {
        // Line width: 1.0 - 50.0
        if !self.drawing.default_line_width.is_finite() {
            log::warn!(
                "Invalid default_line_width {}, falling back to 1.0",
                self.drawing.default_line_width
            );
            self.drawing.default_line_width = 1.0;
        } else if !(1.0..=50.0).contains(&self.drawing.default_line_width) {
            log::warn!(
                "Invalid default_line_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_line_width
            );
            self.drawing.default_line_width = self.drawing.default_line_width.clamp(1.0, 50.0);
        }

        // Canvas size: 1 - 8192
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        // Polygon offsets must be usable angles
        let defaults = PolygonConfig::default();
        for (name, value, default) in [
            (
                "triangle_offset",
                &mut self.polygon.triangle_offset,
                defaults.triangle_offset,
            ),
            (
                "pentagon_offset",
                &mut self.polygon.pentagon_offset,
                defaults.pentagon_offset,
            ),
            (
                "hexagon_offset",
                &mut self.polygon.hexagon_offset,
                defaults.hexagon_offset,
            ),
        ] {
            if !value.is_finite() {
                log::warn!("Invalid polygon {} {}, using default", name, value);
                *value = default;
            }
        }

        // Validate tool name
        let tool = Tool::from_name(&self.drawing.default_tool);
        if tool.name() != self.drawing.default_tool.trim().to_ascii_lowercase() {
            log::warn!(
                "Unknown default_tool '{}', falling back to 'line'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = tool.name().to_string();
        }
    }

    /// Toolbar style the paint tool starts with.
    pub fn initial_style(&self) -> Style {
        Style {
            stroke_color: self.drawing.default_color.to_color(),
            fill_color: self.drawing.default_fill_color.to_color(),
            line_width: self.drawing.default_line_width,
            fill_enabled: self.drawing.fill_enabled,
            line_cap: self.drawing.line_cap,
        }
    }

    /// Tool selected at startup.
    pub fn initial_tool(&self) -> Tool {
        Tool::from_name(&self.drawing.default_tool)
    }

    /// Polygon rotation angles.
    pub fn polygon_offsets(&self) -> PolygonOffsets {
        PolygonOffsets {
            triangle: self.polygon.triangle_offset,
            pentagon: self.polygon.pentagon_offset,
            hexagon: self.polygon.hexagon_offset,
        }
    }

    /// Color the canvas starts with (transparent when unset).
    pub fn background_color(&self) -> Color {
        self.canvas
            .background
            .as_ref()
            .map_or(TRANSPARENT, |spec| spec.to_color_or(TRANSPARENT))
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintapp/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintapp");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, LineCap, WHITE};
    use std::f64::consts::PI;

    fn parse(source: &str) -> Config {
        let mut config = Config::from_toml_str(source).expect("valid toml");
        config.validate_and_clamp();
        config
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("");
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.initial_tool(), Tool::Line);

        let style = config.initial_style();
        assert_eq!(style.stroke_color, BLACK);
        assert_eq!(style.line_width, 1.0);
        assert!(!style.fill_enabled);
        assert_eq!(style.line_cap, LineCap::Round);
        assert_eq!(config.background_color(), TRANSPARENT);

        let offsets = config.polygon_offsets();
        assert_eq!(offsets.triangle, 0.65 * PI / 4.0);
        assert_eq!(offsets.pentagon, 1.15 * PI / 4.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse(
            r#"
            [drawing]
            default_line_width = 500.0
            default_tool = "spiral"

            [canvas]
            width = 0
            height = 100000
            "#,
        );
        assert_eq!(config.drawing.default_line_width, 50.0);
        assert_eq!(config.drawing.default_tool, "line");
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
    }

    #[test]
    fn explicit_values_are_honoured() {
        let config = parse(
            r##"
            [drawing]
            default_color = "#ff0000"
            default_fill_color = [0, 0, 255]
            default_line_width = 4.5
            line_cap = "square"
            fill_enabled = true
            default_tool = "Pentagon"

            [canvas]
            background = "white"

            [polygon]
            pentagon_offset = 0.0
            "##,
        );
        let style = config.initial_style();
        assert_eq!(style.stroke_color, crate::draw::RED);
        assert_eq!(style.fill_color, crate::draw::BLUE);
        assert_eq!(style.line_width, 4.5);
        assert_eq!(style.line_cap, LineCap::Square);
        assert!(style.fill_enabled);
        assert_eq!(config.initial_tool(), Tool::Pentagon);
        assert_eq!(config.background_color(), WHITE);
        assert_eq!(config.polygon_offsets().pentagon, 0.0);
    }

    #[test]
    fn schema_lists_top_level_tables() {
        let schema = serde_json::to_value(Config::json_schema()).expect("schema serializes");
        let properties = schema["properties"].as_object().expect("object schema");
        for table in ["drawing", "canvas", "polygon", "export"] {
            assert!(properties.contains_key(table), "missing {table}");
        }
    }
}
