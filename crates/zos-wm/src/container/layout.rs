//! Layout invalidation after geometry changes

use crate::control::{ControlTree, Parent};

impl ControlTree {
    /// Mark a container's dependent layout as stale
    ///
    /// Called after every gesture step that changed geometry. The renderer
    /// drains the set with [`ControlTree::take_dirty_layouts`].
    pub fn update_control_sizes(&mut self, parent: Parent) {
        if !parent.is_container() {
            return;
        }
        if !self.dirty_layouts.contains(&parent) {
            self.dirty_layouts.push(parent);
        }
    }

    /// Containers whose layout changed since the last call
    pub fn take_dirty_layouts(&mut self) -> Vec<Parent> {
        std::mem::take(&mut self.dirty_layouts)
    }
}
