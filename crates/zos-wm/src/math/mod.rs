//! Core geometry types for the window manager
//!
//! Integer vectors, rectangles and bounding boxes used by hit testing,
//! snapping and anchor discovery.

mod vec2;
mod rect;
mod aabb;
mod style;

pub use vec2::Vec2Int;
pub use rect::Rect;
pub use aabb::Aabb;
pub use style::{FrameStyle, FRAME_STYLE};
