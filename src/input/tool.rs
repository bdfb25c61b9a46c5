//! Drawing tool selection.

use std::fmt;

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags the
/// pointer. Tools are chosen by name from a palette; any name outside the
/// known set selects [`Tool::Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Straight line between start and end points
    #[default]
    Line,
    /// Half disc centered on the start point
    Semicircle,
    /// Circle centered on the start point
    Circle,
    /// Equilateral triangle inscribed in the drag circle
    Triangle,
    /// Rectangle from corner to corner
    Rectangle,
    /// Regular pentagon inscribed in the drag circle
    Pentagon,
    /// Regular hexagon inscribed in the drag circle
    Hexagon,
}

impl Tool {
    /// All tools in palette order.
    pub const ALL: [Tool; 7] = [
        Tool::Line,
        Tool::Semicircle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Rectangle,
        Tool::Pentagon,
        Tool::Hexagon,
    ];

    /// Looks up a tool by palette name, falling back to [`Tool::Line`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => Tool::Line,
            "semicircle" => Tool::Semicircle,
            "circle" => Tool::Circle,
            "triangle" => Tool::Triangle,
            "rectangle" => Tool::Rectangle,
            "pentagon" => Tool::Pentagon,
            "hexagon" => Tool::Hexagon,
            other => {
                log::debug!("Unknown tool '{}', using line", other);
                Tool::Line
            }
        }
    }

    /// Palette name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Semicircle => "semicircle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Rectangle => "rectangle",
            Tool::Pentagon => "pentagon",
            Tool::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
