mod core;
mod mouse;

pub use self::core::{DrawingState, PreviewController};
