//! Control struct and container reference

use serde::Serialize;
use crate::anchor::AnchorKind;
use crate::math::{Rect, Vec2Int};
use super::{ControlId, Window};

/// Container a control lives in
///
/// Control positions are relative to their container: the desktop origin, or
/// the body of the parent window. Detached controls have no container and so
/// never snap or gather siblings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Parent {
    /// Not placed in any container
    Detached,
    /// Top level of the desktop
    #[default]
    Desktop,
    /// Body of a window
    Window(ControlId),
}

impl Parent {
    /// Check if this parent provides snapping and neighbour queries
    #[inline]
    pub fn is_container(self) -> bool {
        !matches!(self, Parent::Detached)
    }
}

/// What kind of control this is
#[derive(Debug)]
pub enum ControlKind {
    /// Window with chrome and gesture handling
    Window(Window),
    /// Plain control; moved by anchoring but never resized recursively
    Plain,
}

/// A rectangle in the control tree
#[derive(Debug)]
pub struct Control {
    /// Unique identifier
    pub id: ControlId,
    /// Container this control lives in
    pub parent: Parent,
    /// Geometry relative to the container
    pub(crate) rect: Rect,
    /// Window or plain control
    pub kind: ControlKind,
}

impl Control {
    /// Bounding rectangle in container coordinates
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> Vec2Int {
        self.rect.position
    }

    #[inline]
    pub fn size(&self) -> Vec2Int {
        self.rect.size
    }

    #[inline]
    pub fn top_left(&self) -> Vec2Int {
        self.rect.top_left()
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec2Int {
        self.rect.bottom_right()
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn set_position(&mut self, position: Vec2Int) {
        self.rect.set_position(position);
    }

    pub fn set_size(&mut self, size: Vec2Int) {
        self.rect.set_size(size);
    }

    /// Move the top-left corner, keeping the bottom-right corner in place
    pub fn set_top_left(&mut self, top_left: Vec2Int) {
        self.rect.set_top_left(top_left);
    }

    /// Move the bottom-right corner, keeping the top-left corner in place
    pub fn set_bottom_right(&mut self, bottom_right: Vec2Int) {
        self.rect.set_bottom_right(bottom_right);
    }

    #[inline]
    pub fn is_window(&self) -> bool {
        matches!(self.kind, ControlKind::Window(_))
    }

    pub fn window(&self) -> Option<&Window> {
        match &self.kind {
            ControlKind::Window(window) => Some(window),
            ControlKind::Plain => None,
        }
    }

    pub fn window_mut(&mut self) -> Option<&mut Window> {
        match &mut self.kind {
            ControlKind::Window(window) => Some(window),
            ControlKind::Plain => None,
        }
    }

    /// How this control behaves when anchored to a resizing window
    #[inline]
    pub fn anchor_kind(&self) -> AnchorKind {
        if self.is_window() {
            AnchorKind::Window
        } else {
            AnchorKind::Control
        }
    }
}
