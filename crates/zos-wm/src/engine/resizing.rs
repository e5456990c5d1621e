//! Edge and corner resize with anchor propagation

use tracing::{debug, trace};
use crate::anchor::gather_anchors;
use crate::control::{ControlId, Window};
use crate::input::{mask_to_cursor, DragSnapshot, Gesture, PointerCapture, NEUTRAL_CURSOR};
use crate::math::{Rect, Vec2Int};
use super::WmEngine;

impl WmEngine {
    /// Start resizing a window
    ///
    /// `mask` defaults to the edge mask under `pointer`. With
    /// `gather_siblings`, side handles also drag the neighbours sharing the
    /// edge. Anchored windows start their own resize with the mask they were
    /// gathered with; only `id` takes the pointer capture.
    pub fn begin_resize(
        &mut self,
        id: ControlId,
        pointer: Vec2Int,
        mask: Option<Vec2Int>,
        gather_siblings: bool,
    ) {
        self.end_gesture();

        if !self.begin_resize_inner(id, pointer, mask, gather_siblings) {
            return;
        }

        let capture = PointerCapture::acquire(self.surface.clone(), id);
        if let Some(Gesture::Resizing { capture: slot, .. }) = self.tree.window_mut(id).map(|w| &mut w.gesture) {
            *slot = Some(capture);
        }
        self.active = Some(id);
    }

    fn begin_resize_inner(
        &mut self,
        id: ControlId,
        pointer: Vec2Int,
        mask: Option<Vec2Int>,
        gather_siblings: bool,
    ) -> bool {
        let snapshot = match self.tree.get(id) {
            Some(control) if control.is_window() => DragSnapshot {
                mouse_start: pointer,
                position_start: control.position(),
                size_start: control.size(),
            },
            _ => return false,
        };
        let mask = mask.unwrap_or_else(|| self.edge_mask_at(id, pointer));

        // Anchors from an earlier gesture must not leak into this one
        if let Some(window) = self.tree.window_mut(id) {
            window.gesture = Gesture::Idle;
        }

        let island = gather_anchors(&self.tree, id, mask, gather_siblings);
        let anchored = island.windows();
        debug!(id, ?mask, anchors = island.len(), "resize started");

        if let Some(window) = self.tree.window_mut(id) {
            window.gesture = Gesture::Resizing {
                snapshot,
                mask,
                island,
                capture: None,
            };
        }

        for entry in anchored {
            self.begin_resize_inner(entry.control, pointer, Some(entry.mask), false);
        }
        true
    }

    /// Apply a pointer sample to a resizing window and its anchors
    ///
    /// `offset_scale` is `Vec2Int::ONE` for the driving window and for
    /// siblings; children gathered from a near-edge drag run with `-1` on that
    /// axis so they hold their place while the body origin moves.
    pub fn update_resize(&mut self, id: ControlId, pointer: Vec2Int, mask: Vec2Int, offset_scale: Vec2Int) {
        let (snapshot, island, parent) = match self.tree.get(id) {
            Some(control) => match control.window().map(Window::gesture) {
                Some(Gesture::Resizing { snapshot, island, .. }) => (*snapshot, island.clone(), control.parent),
                _ => return,
            },
            None => return,
        };

        let offset = (pointer - snapshot.mouse_start) * offset_scale;
        let mut rect = Rect::new(
            snapshot.position_start - offset * mask.min0(),
            snapshot.size_start + offset * mask,
        );

        // Anchors move with this window and are not snap targets
        let mut exclude = vec![id];
        exclude.extend(island.controls());

        if mask.any_positive() {
            if let Some(bottom_right) = self.tree.snap_edge(parent, rect.bottom_right(), mask.max0(), &exclude) {
                rect.set_bottom_right(bottom_right);
            }
        }
        if mask.any_negative() {
            if let Some(top_left) = self.tree.snap_edge(parent, rect.top_left(), mask.min0(), &exclude) {
                rect.set_top_left(top_left);
            }
        }

        // Clamped axes keep the far edge they started with
        let min_size = self.tree.style().min_window_size;
        let limit = snapshot.position_start + snapshot.size_start - min_size;
        if rect.size.x < min_size.x {
            rect.size.x = min_size.x;
            rect.position.x = rect.position.x.min(limit.x);
        }
        if rect.size.y < min_size.y {
            rect.size.y = min_size.y;
            rect.position.y = rect.position.y.min(limit.y);
        }

        trace!(id, position = ?rect.position, size = ?rect.size, "resize");
        if let Some(control) = self.tree.get_mut(id) {
            control.set_rect(rect);
        }

        for entry in island.windows() {
            self.update_resize(entry.control, pointer, entry.mask, entry.scale);
        }

        if self.active == Some(id) {
            self.surface.set_cursor(mask_to_cursor(mask));
        }
        self.tree.update_control_sizes(parent);
    }

    /// Finish a resize on a window and every window anchored to it
    pub fn end_resize(&mut self, id: ControlId) {
        let window = match self.tree.window_mut(id) {
            Some(window) if window.gesture.is_resize() => window,
            _ => return,
        };
        let (island, capture) = match std::mem::take(&mut window.gesture) {
            Gesture::Resizing { island, capture, .. } => (island, capture),
            _ => return,
        };

        for entry in island.windows() {
            self.end_resize(entry.control);
        }

        if capture.is_some() {
            self.surface.set_cursor(NEUTRAL_CURSOR);
        }
        drop(capture);

        if self.active == Some(id) {
            self.active = None;
        }
        debug!(id, "resize ended");
    }
}
