//! Input handling module
//!
//! Edge classification, cursor feedback, per-window gesture state and the
//! pointer capture held while a gesture is active.

mod mask;
mod cursor;
mod capture;
mod drag;
mod result;

pub use mask::compute_edge_mask;
pub use cursor::{mask_to_cursor, NEUTRAL_CURSOR};
pub use capture::{InputSurface, NullSurface, PointerCapture};
pub use drag::{DragSnapshot, Gesture};
pub use result::InputResult;
