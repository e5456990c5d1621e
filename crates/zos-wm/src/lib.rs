//! Floating Window Manager for Zero OS
//!
//! This crate provides interactive move and resize for floating windows:
//! - Edge and corner hot zones with matching resize cursors
//! - Snapping of dragged edges to neighbouring windows and container bounds
//! - Anchor islands: neighbours sharing a dragged edge, and children pinned
//!   to a window body, follow the gesture in lockstep
//! - Minimum-size clamping that keeps the opposite edge fixed
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry (`Vec2Int`, `Rect`, `Aabb`) and `FrameStyle`
//! - [`control`]: Control tree, windows, hit testing
//! - [`container`]: Snap queries and layout invalidation on containers
//! - [`input`]: Edge masks, cursors, pointer capture, gesture state
//! - [`anchor`]: Anchor entries and island discovery
//!
//! ## Example
//!
//! ```rust
//! use zos_wm::{Vec2Int, WindowConfig, WmEngine};
//!
//! let mut engine = WmEngine::default();
//! let id = engine
//!     .create_window(WindowConfig::new("Editor", Vec2Int::new(0, 0), Vec2Int::new(100, 100)))
//!     .unwrap();
//!
//! // Grab the right edge and drag it 20px to the right
//! engine.pointer_down(Vec2Int::new(99, 50));
//! engine.pointer_move(Vec2Int::new(119, 55));
//! engine.pointer_up();
//!
//! assert_eq!(engine.tree.get(id).unwrap().size(), Vec2Int::new(120, 100));
//! ```

pub mod math;
pub mod control;
pub mod container;
pub mod input;
pub mod anchor;
pub mod error;

mod engine;

#[cfg(test)]
mod test_utils;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Aabb, FrameStyle, Rect, Vec2Int, FRAME_STYLE};
pub use control::{Control, ControlConfig, ControlId, ControlKind, ControlTree, Parent, Window, WindowConfig, WindowRegion};
pub use input::{Gesture, InputResult, InputSurface, NullSurface, PointerCapture};
pub use anchor::{AnchorEntry, AnchorIsland, AnchorKind};
pub use error::WmError;

pub use engine::WmEngine;
