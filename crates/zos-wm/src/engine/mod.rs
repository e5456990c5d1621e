//! Window manager engine driving move and resize gestures
//!
//! This module is split into focused submodules:
//! - `moving`: title-bar drag with edge snapping
//! - `resizing`: edge drag with anchor propagation and minimum-size clamping
//! - `pointer`: routing of raw pointer events to the gestures

mod moving;
mod resizing;
mod pointer;

use std::rc::Rc;
use tracing::debug;
use crate::control::{ControlId, ControlTree, Window, WindowConfig};
use crate::error::WmError;
use crate::input::{compute_edge_mask, Gesture, InputSurface, NullSurface, NEUTRAL_CURSOR};
use crate::math::{FrameStyle, Vec2Int, FRAME_STYLE};

/// Engine owning the control tree and the active gesture
///
/// All calls are synchronous and expected on the UI thread. At most one
/// gesture drives the engine at a time; windows anchored to it are updated
/// from the driver's pointer samples.
pub struct WmEngine {
    /// Control tree (windows, plain controls, containers)
    pub tree: ControlTree,
    /// Host surface for pointer capture and cursor changes
    surface: Rc<dyn InputSurface>,
    /// Window driving the current gesture
    active: Option<ControlId>,
}

impl Default for WmEngine {
    fn default() -> Self {
        Self::with_surface(Rc::new(NullSurface))
    }
}

impl WmEngine {
    /// Create an engine with a validated style
    pub fn new(style: FrameStyle, surface: Rc<dyn InputSurface>) -> Result<Self, WmError> {
        style.validate()?;
        Ok(Self {
            tree: ControlTree::new(style),
            surface,
            active: None,
        })
    }

    /// Create an engine with the default frame style
    pub fn with_surface(surface: Rc<dyn InputSurface>) -> Self {
        Self {
            tree: ControlTree::new(FRAME_STYLE),
            surface,
            active: None,
        }
    }

    /// Window driving the current gesture
    #[inline]
    pub fn active_gesture(&self) -> Option<ControlId> {
        self.active
    }

    /// Check if a move or resize is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Gesture state of a window
    pub fn gesture(&self, id: ControlId) -> Option<&Gesture> {
        self.tree.window(id).map(Window::gesture)
    }

    /// Create a new window
    pub fn create_window(&mut self, config: WindowConfig) -> Result<ControlId, WmError> {
        self.tree.create_window(config)
    }

    /// Remove a control and its descendants
    ///
    /// A gesture driven from inside the removed subtree is ended first so its
    /// anchored windows are released too.
    pub fn remove(&mut self, id: ControlId) -> Result<Vec<ControlId>, WmError> {
        if let Some(active) = self.active {
            if self.tree.is_within(active, id) {
                self.end_gesture();
            }
        }
        self.tree.remove(id)
    }

    /// End whichever gesture is active
    pub fn end_gesture(&mut self) {
        let id = match self.active {
            Some(id) => id,
            None => return,
        };

        let is_move = self.gesture(id).is_some_and(Gesture::is_move);
        if is_move {
            self.end_move(id);
        } else {
            self.end_resize(id);
        }

        if self.active.take().is_some() {
            debug!(id, "gesture state dropped without a matching window");
            self.surface.set_cursor(NEUTRAL_CURSOR);
        }
    }

    /// Edge mask under a document-space pointer for a window
    pub(crate) fn edge_mask_at(&self, id: ControlId, pointer: Vec2Int) -> Vec2Int {
        let control = match self.tree.get(id) {
            Some(control) => control,
            None => return Vec2Int::ZERO,
        };
        let local = pointer - self.tree.absolute_origin(control.parent);
        compute_edge_mask(local, &control.rect(), self.tree.style().resize_handle_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Parent;
    use crate::test_utils::RecordingSurface;

    #[test]
    fn test_new_rejects_invalid_style() {
        let style = FrameStyle {
            snap_border_size: -2,
            ..FRAME_STYLE
        };
        assert!(matches!(
            WmEngine::new(style, Rc::new(NullSurface)),
            Err(WmError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_edge_mask_uses_container_origin() {
        let mut engine = WmEngine::default();
        let outer = engine
            .create_window(WindowConfig::new("Outer", Vec2Int::new(100, 100), Vec2Int::new(400, 400)))
            .unwrap();
        let inner = engine
            .create_window(
                WindowConfig::new("Inner", Vec2Int::new(0, 0), Vec2Int::new(100, 100))
                    .with_parent(Parent::Window(outer)),
            )
            .unwrap();

        let bar = engine.tree.style().title_bar_height;
        // Right edge of inner, in document coordinates
        let pointer = Vec2Int::new(100 + 98, 100 + bar + 50);
        assert_eq!(engine.edge_mask_at(inner, pointer), Vec2Int::new(1, 0));
        assert_eq!(engine.edge_mask_at(999, pointer), Vec2Int::ZERO);
    }

    #[test]
    fn test_remove_active_window_ends_gesture() {
        let surface = Rc::new(RecordingSurface::default());
        let mut engine = WmEngine::with_surface(surface.clone());
        let id = engine
            .create_window(WindowConfig::new("W", Vec2Int::new(100, 100), Vec2Int::new(200, 200)))
            .unwrap();

        engine.begin_resize(id, Vec2Int::new(299, 200), None, true);
        assert_eq!(surface.active_captures(), 1);

        engine.remove(id).unwrap();
        assert!(!engine.is_dragging());
        assert_eq!(surface.active_captures(), 0);
        assert_eq!(surface.last_cursor().as_deref(), Some("auto"));
    }
}
