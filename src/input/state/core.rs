//! Drawing state machine and preview controller state.

use crate::draw::{Color, Point, PolygonOffsets, RenderSurface, ShapeKind};
use crate::input::tool::Tool;
use log::debug;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or dragging out a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not dragging - pointer movement is ignored
    Idle,
    /// Primary button held down; a live preview is on the surface
    Drawing {
        /// Where the pointer went down (fixed for the whole drag)
        start: Point,
    },
}

/// Owns a raster surface and keeps it free of stale preview frames.
///
/// The controller holds at most one snapshot: the committed raster captured
/// when the current drag began. Every preview frame starts by restoring it,
/// so the surface shows the committed drawing plus exactly one live shape.
pub struct PreviewController<S: RenderSurface> {
    pub(super) surface: S,
    pub(super) tool: Tool,
    pub(super) polygon_offsets: PolygonOffsets,
    pub(super) state: DrawingState,
    pub(super) snapshot: Option<S::Snapshot>,
}

impl<S: RenderSurface> PreviewController<S> {
    /// Creates a controller drawing onto `surface` with the default tool.
    pub fn new(surface: S) -> Self {
        Self::with_defaults(surface, Tool::default(), PolygonOffsets::default())
    }

    /// Creates a controller with an explicit initial tool and polygon rotation.
    pub fn with_defaults(surface: S, tool: Tool, polygon_offsets: PolygonOffsets) -> Self {
        Self {
            surface,
            tool,
            polygon_offsets,
            state: DrawingState::Idle,
            snapshot: None,
        }
    }

    /// Selects the tool used by the next preview frame.
    ///
    /// Switching mid-drag takes effect on the next pointer event.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Geometry the current tool draws.
    pub fn shape_kind(&self) -> ShapeKind {
        ShapeKind::for_tool(self.tool, &self.polygon_offsets)
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Aborts an active drag, leaving only the committed drawing.
    pub fn cancel(&mut self) {
        if !self.is_drawing() {
            return;
        }
        if let Some(snapshot) = self.snapshot.take() {
            self.surface.restore(&snapshot);
        }
        self.state = DrawingState::Idle;
        debug!("Drag cancelled");
    }

    /// Wipes the committed drawing and fills the surface with `background`.
    ///
    /// Ignored while a drag is in progress.
    pub fn clear(&mut self, background: Color) {
        if self.is_drawing() {
            debug!("Ignoring clear during drag");
            return;
        }
        self.surface.paint(background);
    }
}
