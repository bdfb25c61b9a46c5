//! Input handling and drag preview state machine.
//!
//! This module translates host pointer events into drawing actions. It holds
//! the current tool and drives the live preview: the raster is snapshotted
//! when a drag starts and restored before every preview frame.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerKind, SurfaceOffset, to_surface_point};
pub use state::{DrawingState, PreviewController};
pub use tool::Tool;
