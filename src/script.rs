//! Line-oriented event scripts that stand in for a live UI host.
//!
//! Each non-empty line is one command. Lines whose first non-blank character
//! is `#` are comments; a `#` later on a line is part of the argument, so
//! `color #ff8800` works as expected.
//!
//! ```text
//! tool circle          # select a palette tool (unknown names draw lines)
//! color #1e90ff        # color picker value
//! width 3              # line width field text
//! fill on              # fill checkbox
//! offset 10 20         # on-screen position of the surface
//! down 110 120         # pointer events in viewport coordinates
//! move 110 170
//! up 110 180
//! cancel               # abort the current drag
//! clear                # wipe the canvas
//! ```

use crate::draw::{Color, RenderSurface, Style, StyleInputs};
use crate::input::{PointerEvent, PointerKind, PreviewController, SurfaceOffset, Tool};
use log::debug;
use thiserror::Error;

/// Errors raised while parsing a script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: '{value}' is not a number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: '{value}' is not on/off")]
    InvalidToggle { line: usize, value: String },
}

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Select a palette tool
    Tool(Tool),
    /// Set the color picker text
    Color(String),
    /// Set the line width field text
    Width(String),
    /// Toggle the fill checkbox
    Fill(bool),
    /// Move the surface on screen
    Offset(SurfaceOffset),
    /// Deliver a pointer event in viewport coordinates
    Pointer(PointerEvent),
    /// Abort the active drag
    Cancel,
    /// Wipe the canvas to its background
    Clear,
}

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (word, rest) = match text.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (text, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "tool" => ScriptCommand::Tool(Tool::from_name(rest)),
            "color" => ScriptCommand::Color(rest.to_string()),
            "width" => ScriptCommand::Width(rest.to_string()),
            "fill" => ScriptCommand::Fill(parse_toggle(line, rest)?),
            "offset" => {
                let (left, top) = parse_pair(line, "offset", rest)?;
                ScriptCommand::Offset(SurfaceOffset::new(left, top))
            }
            "down" => pointer(line, "down", PointerKind::Down, rest)?,
            "move" => pointer(line, "move", PointerKind::Move, rest)?,
            "up" => pointer(line, "up", PointerKind::Up, rest)?,
            "cancel" => ScriptCommand::Cancel,
            "clear" => ScriptCommand::Clear,
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: word.to_string(),
                });
            }
        };
        commands.push(command);
    }
    Ok(commands)
}

fn pointer(
    line: usize,
    command: &'static str,
    kind: PointerKind,
    rest: &str,
) -> Result<ScriptCommand, ScriptError> {
    let (x, y) = parse_pair(line, command, rest)?;
    Ok(ScriptCommand::Pointer(PointerEvent::new(kind, x, y)))
}

fn parse_pair(line: usize, command: &'static str, rest: &str) -> Result<(f64, f64), ScriptError> {
    let mut parts = rest.split_whitespace();
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "two numbers",
        });
    };
    Ok((parse_number(line, a)?, parse_number(line, b)?))
}

fn parse_number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

fn parse_toggle(line: usize, value: &str) -> Result<bool, ScriptError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        "" => Err(ScriptError::MissingArgument {
            line,
            command: "fill",
            expected: "on or off",
        }),
        _ => Err(ScriptError::InvalidToggle {
            line,
            value: value.to_string(),
        }),
    }
}

/// Plays script commands against a [`PreviewController`].
///
/// Keeps the toolbar state (raw style inputs and surface offset) the way a UI
/// host would, resolving the style afresh for every pointer event.
pub struct ScriptHost<S: RenderSurface> {
    controller: PreviewController<S>,
    inputs: StyleInputs,
    defaults: Style,
    offset: SurfaceOffset,
    background: Color,
}

impl<S: RenderSurface> ScriptHost<S> {
    /// Creates a host whose toolbar starts out showing `defaults`.
    pub fn new(controller: PreviewController<S>, defaults: Style, background: Color) -> Self {
        let inputs = StyleInputs {
            line_width: defaults.line_width.to_string(),
            color: String::new(),
            fill: defaults.fill_enabled,
        };
        Self {
            controller,
            inputs,
            defaults,
            offset: SurfaceOffset::default(),
            background,
        }
    }

    /// Applies one command.
    pub fn apply(&mut self, command: &ScriptCommand) {
        debug!("Script command: {:?}", command);
        match command {
            ScriptCommand::Tool(tool) => self.controller.set_tool(*tool),
            ScriptCommand::Color(value) => self.inputs.color = value.clone(),
            ScriptCommand::Width(value) => self.inputs.line_width = value.clone(),
            ScriptCommand::Fill(enabled) => self.inputs.fill = *enabled,
            ScriptCommand::Offset(offset) => self.offset = *offset,
            ScriptCommand::Pointer(event) => {
                let style = self.style();
                self.controller.handle_pointer(event, self.offset, &style);
            }
            ScriptCommand::Cancel => self.controller.cancel(),
            ScriptCommand::Clear => self.controller.clear(self.background),
        }
    }

    /// Applies commands in order.
    pub fn run(&mut self, commands: &[ScriptCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Style the toolbar currently describes.
    pub fn style(&self) -> Style {
        self.inputs.resolve(&self.defaults)
    }

    pub fn controller(&self) -> &PreviewController<S> {
        &self.controller
    }

    pub fn into_controller(self) -> PreviewController<S> {
        self.controller
    }
}
