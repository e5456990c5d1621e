//! Control management module
//!
//! Controls are the rectangles a container lays out; windows are controls with
//! a title bar, a body that can hold children, and gesture state.

#[allow(clippy::module_inception)]
mod control;
mod window;
mod config;
mod region;
mod tree;

pub use control::{Control, ControlKind, Parent};
pub use window::Window;
pub use config::{ControlConfig, WindowConfig};
pub use region::{hit_test_window, WindowRegion};
pub use tree::ControlTree;

/// Unique control identifier
pub type ControlId = u64;
