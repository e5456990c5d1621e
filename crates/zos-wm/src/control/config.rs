//! Control configuration for creation

use crate::math::Vec2Int;
use super::Parent;

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial position in container coordinates
    pub position: Vec2Int,
    /// Initial size including the title bar
    pub size: Vec2Int,
    /// Container the window is placed in
    pub parent: Parent,
}

impl WindowConfig {
    /// Top-level window with a title, position and size
    pub fn new(title: impl Into<String>, position: Vec2Int, size: Vec2Int) -> Self {
        Self {
            title: title.into(),
            position,
            size,
            parent: Parent::Desktop,
        }
    }

    /// Place the window in another container
    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = parent;
        self
    }
}

/// Configuration for creating a plain control
#[derive(Clone, Debug, Default)]
pub struct ControlConfig {
    /// Initial position in container coordinates
    pub position: Vec2Int,
    /// Initial size
    pub size: Vec2Int,
    /// Container the control is placed in
    pub parent: Parent,
}
