//! Pointer event routing

use tracing::debug;
use crate::control::{Window, WindowRegion};
use crate::input::{mask_to_cursor, Gesture, InputResult, NEUTRAL_CURSOR};
use crate::math::Vec2Int;
use super::WmEngine;

impl WmEngine {
    /// Handle pointer down (document coordinates)
    ///
    /// Resize handles and title bars start a gesture on the topmost window
    /// under the pointer and raise it; bodies pass through.
    pub fn pointer_down(&mut self, pointer: Vec2Int) -> InputResult {
        // Pointer-up was lost (released outside the page, focus change)
        if let Some(stale) = self.active {
            debug!(id = stale, "ending stale gesture");
            self.end_gesture();
        }

        let (id, region) = match self.tree.region_at(pointer) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::Resize(mask) => {
                self.tree.focus(id);
                self.begin_resize(id, pointer, Some(mask), true);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.tree.focus(id);
                self.begin_move(id, pointer);
                InputResult::Handled
            }
            WindowRegion::Body => InputResult::Unhandled,
        }
    }

    /// Handle pointer move (document coordinates)
    pub fn pointer_move(&mut self, pointer: Vec2Int) -> InputResult {
        let id = match self.active {
            Some(id) => id,
            None => {
                return InputResult::Hover {
                    cursor: self.hover_cursor(pointer),
                }
            }
        };

        let resize_mask = match self.tree.window(id).map(Window::gesture) {
            Some(Gesture::Moving { .. }) => None,
            Some(Gesture::Resizing { mask, .. }) => Some(*mask),
            _ => {
                self.active = None;
                return InputResult::Unhandled;
            }
        };

        match resize_mask {
            Some(mask) => self.update_resize(id, pointer, mask, Vec2Int::ONE),
            None => self.update_move(id, pointer),
        }
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self) -> InputResult {
        if self.active.is_none() {
            return InputResult::Unhandled;
        }
        self.end_gesture();
        InputResult::Handled
    }

    /// Cursor for the element under `pointer`
    ///
    /// An active resize keeps its own cursor even when the pointer leaves the
    /// handle.
    pub fn hover_cursor(&self, pointer: Vec2Int) -> &'static str {
        let active_mask = self
            .active
            .and_then(|id| self.tree.window(id))
            .and_then(|window| window.gesture().resize_mask());
        if let Some(mask) = active_mask {
            return mask_to_cursor(mask);
        }

        self.tree
            .region_at(pointer)
            .map_or(NEUTRAL_CURSOR, |(_, region)| region.cursor())
    }
}
