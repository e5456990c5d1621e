//! Title-bar drag

use tracing::{debug, trace};
use crate::control::{ControlId, Window};
use crate::input::{DragSnapshot, Gesture, PointerCapture};
use crate::math::{Rect, Vec2Int};
use super::WmEngine;

impl WmEngine {
    /// Start dragging a window by its title bar
    pub fn begin_move(&mut self, id: ControlId, pointer: Vec2Int) {
        self.end_gesture();

        let snapshot = match self.tree.get(id) {
            Some(control) if control.is_window() => DragSnapshot {
                mouse_start: pointer,
                position_start: control.position(),
                size_start: control.size(),
            },
            _ => return,
        };

        let capture = PointerCapture::acquire(self.surface.clone(), id);
        if let Some(window) = self.tree.window_mut(id) {
            window.gesture = Gesture::Moving { snapshot, capture };
        }
        self.active = Some(id);
        debug!(id, ?pointer, "move started");
    }

    /// Follow the pointer, snapping both corners to nearby edges
    ///
    /// The top-left corner snaps first; a bottom-right snap found afterwards
    /// wins on the axes it touches.
    pub fn update_move(&mut self, id: ControlId, pointer: Vec2Int) {
        let (snapshot, parent) = match self.tree.get(id) {
            Some(control) => match control.window().map(Window::gesture) {
                Some(Gesture::Moving { snapshot, .. }) => (*snapshot, control.parent),
                _ => return,
            },
            None => return,
        };

        let mut rect = Rect::new(
            snapshot.position_start + (pointer - snapshot.mouse_start),
            snapshot.size_start,
        );

        let exclude = [id];
        if let Some(top_left) = self.tree.snap_edge(parent, rect.top_left(), Vec2Int::splat(-1), &exclude) {
            rect.set_position(top_left);
        }
        if let Some(bottom_right) = self.tree.snap_edge(parent, rect.bottom_right(), Vec2Int::ONE, &exclude) {
            rect.set_position(bottom_right - rect.size);
        }

        trace!(id, position = ?rect.position, "move");
        if let Some(control) = self.tree.get_mut(id) {
            control.set_rect(rect);
        }
        self.tree.update_control_sizes(parent);
    }

    /// Finish a move, releasing the pointer capture
    pub fn end_move(&mut self, id: ControlId) {
        let window = match self.tree.window_mut(id) {
            Some(window) if window.gesture.is_move() => window,
            _ => return,
        };
        window.gesture = Gesture::Idle;

        if self.active == Some(id) {
            self.active = None;
        }
        debug!(id, "move ended");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::control::WindowConfig;
    use crate::engine::WmEngine;
    use crate::math::Vec2Int;
    use crate::test_utils::RecordingSurface;

    fn engine_with_window(surface: Rc<RecordingSurface>) -> (WmEngine, u64) {
        let mut engine = WmEngine::with_surface(surface);
        let id = engine
            .create_window(WindowConfig::new("W", Vec2Int::new(100, 100), Vec2Int::new(200, 200)))
            .unwrap();
        (engine, id)
    }

    #[test]
    fn test_move_follows_pointer() {
        let surface = Rc::new(RecordingSurface::default());
        let (mut engine, id) = engine_with_window(surface.clone());

        engine.begin_move(id, Vec2Int::new(150, 110));
        assert_eq!(engine.active_gesture(), Some(id));
        assert_eq!(surface.subscribed(), vec![id]);

        engine.update_move(id, Vec2Int::new(300, 410));
        let control = engine.tree.get(id).unwrap();
        assert_eq!(control.position(), Vec2Int::new(250, 400));
        assert_eq!(control.size(), Vec2Int::new(200, 200));

        engine.end_move(id);
        assert!(!engine.is_dragging());
        assert_eq!(surface.unsubscribed(), vec![id]);
    }

    #[test]
    fn test_move_snaps_to_desktop_origin() {
        let (mut engine, id) = engine_with_window(Rc::new(RecordingSurface::default()));

        engine.begin_move(id, Vec2Int::new(150, 110));
        // Unsnapped position would be (8, 10)
        engine.update_move(id, Vec2Int::new(58, 20));
        assert_eq!(engine.tree.get(id).unwrap().position(), Vec2Int::ZERO);
    }

    #[test]
    fn test_bottom_right_snap_wins() {
        let (mut engine, id) = engine_with_window(Rc::new(RecordingSurface::default()));
        let other = engine
            .create_window(WindowConfig::new("Other", Vec2Int::new(410, 0), Vec2Int::new(100, 100)))
            .unwrap();

        engine.begin_move(id, Vec2Int::new(150, 110));
        // Right edge lands at 404, six short of the neighbour
        engine.update_move(id, Vec2Int::new(254, 510));
        assert_eq!(engine.tree.get(id).unwrap().position(), Vec2Int::new(210, 500));
        assert_eq!(engine.tree.get(other).unwrap().position(), Vec2Int::new(410, 0));
    }

    #[test]
    fn test_update_without_begin_is_ignored() {
        let (mut engine, id) = engine_with_window(Rc::new(RecordingSurface::default()));

        engine.update_move(id, Vec2Int::new(500, 500));
        assert_eq!(engine.tree.get(id).unwrap().position(), Vec2Int::new(100, 100));
        assert!(engine.tree.take_dirty_layouts().is_empty());
    }
}
