use crate::draw::{Point, RenderSurface, Style, render_shape};
use crate::input::events::{PointerEvent, PointerKind, SurfaceOffset, to_surface_point};
use log::debug;

use super::{DrawingState, PreviewController};

impl<S: RenderSurface> PreviewController<S> {
    /// Processes a primary button press at `point` (surface coordinates).
    ///
    /// # Behavior
    /// - While idle: starts a drag anchored at `point` and captures the raster
    /// - While already dragging: drops the live preview and restarts the drag
    ///   at `point`, so the old preview is never baked into the new snapshot
    pub fn on_pointer_down(&mut self, point: Point) {
        if let Some(snapshot) = self.snapshot.take() {
            debug!("Pointer down during drag; restarting at {:?}", point);
            self.surface.restore(&snapshot);
        }

        self.snapshot = Some(self.surface.snapshot());
        self.state = DrawingState::Drawing { start: point };
        debug!("Drag started at ({:.1}, {:.1}) with {}", point.x, point.y, self.tool);
    }

    /// Processes pointer motion to `point` (surface coordinates).
    ///
    /// # Behavior
    /// - While idle: no-op
    /// - While dragging: restores the drag-start raster, then renders exactly
    ///   one preview frame from the drag start to `point` using `style`
    pub fn on_pointer_move(&mut self, point: Point, style: &Style) {
        let DrawingState::Drawing { start } = self.state else {
            return;
        };
        self.redraw_from_snapshot(start, point, style);
    }

    /// Processes a primary button release at `point` (surface coordinates).
    ///
    /// # Behavior
    /// - While idle: no-op
    /// - While dragging: ends the drag, restores the drag-start raster and
    ///   commits the final shape from the drag start to `point`
    pub fn on_pointer_up(&mut self, point: Point, style: &Style) {
        let DrawingState::Drawing { start } = self.state else {
            debug!("Pointer up without an active drag; ignoring");
            return;
        };

        self.state = DrawingState::Idle;
        self.redraw_from_snapshot(start, point, style);
        self.snapshot = None;

        if log::log_enabled!(log::Level::Debug) {
            let kind = self.shape_kind();
            let bounds = kind.path(start, point).bounding_box(style.line_width);
            debug!("Committed {:?} covering {:?}", kind, bounds);
        }
    }

    /// Routes a raw viewport event through the coordinate mapping.
    ///
    /// `offset` must describe the surface position at the time of this event.
    pub fn handle_pointer(&mut self, event: &PointerEvent, offset: SurfaceOffset, style: &Style) {
        let point = to_surface_point(event, offset);
        match event.kind {
            PointerKind::Down => self.on_pointer_down(point),
            PointerKind::Move => self.on_pointer_move(point, style),
            PointerKind::Up => self.on_pointer_up(point, style),
        }
    }

    fn redraw_from_snapshot(&mut self, start: Point, current: Point, style: &Style) {
        if let Some(snapshot) = &self.snapshot {
            self.surface.restore(snapshot);
        }
        let kind = self.shape_kind();
        render_shape(&mut self.surface, kind, start, current, style);
    }
}
