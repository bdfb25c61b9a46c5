//! Pointer event types delivered by the host runtime.

use crate::draw::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved (button state irrelevant)
    Move,
    /// Primary button released
    Up,
}

/// Raw pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Horizontal position relative to the viewport
    pub client_x: f64,
    /// Vertical position relative to the viewport
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
        }
    }
}

/// On-screen position of the drawing surface's top-left corner.
///
/// The host measures this for every event; layout may move the surface
/// between events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceOffset {
    pub left: f64,
    pub top: f64,
}

impl SurfaceOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Translates an event's viewport position into surface coordinates.
pub fn to_surface_point(event: &PointerEvent, offset: SurfaceOffset) -> Point {
    Point::new(event.client_x - offset.left, event.client_y - offset.top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_subtracted_from_viewport_position() {
        let event = PointerEvent::new(PointerKind::Down, 130.0, 95.5);
        let point = to_surface_point(&event, SurfaceOffset::new(30.0, 20.5));
        assert_eq!(point, Point::new(100.0, 75.0));
    }

    #[test]
    fn zero_offset_is_identity() {
        let event = PointerEvent::new(PointerKind::Move, 12.0, 7.0);
        assert_eq!(
            to_surface_point(&event, SurfaceOffset::default()),
            Point::new(12.0, 7.0)
        );
    }
}
